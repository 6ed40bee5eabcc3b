// src/application/note_form.rs
use crate::application::{NoteRepository, NoteStore};
use crate::domain::note::is_blank_entry;
use crate::domain::{DomainError, Note};

/// Uncommitted input for a new note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub date: String,
    pub description: String,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        is_blank_entry(&self.title, &self.description, &self.date)
    }

    /// Add the form's contents to `store`. The fields are cleared on success and
    /// left as entered when the store rejects them.
    pub fn submit<R: NoteRepository>(&mut self, store: &mut NoteStore<R>) -> Result<Note, DomainError> {
        let note = store.add(&self.title, &self.description, &self.date)?;
        self.clear();
        Ok(note)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.date.clear();
        self.description.clear();
    }
}
