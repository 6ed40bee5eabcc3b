// src/application/note_store.rs
use crate::domain::note::is_blank_entry;
use crate::domain::{DomainError, Note};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

pub trait NoteRepository {
    /// Load the persisted snapshot. An absent snapshot is an empty list, not an error.
    fn load_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    /// Replace the persisted snapshot with `notes`.
    fn save_notes(&mut self, notes: &[Note]) -> Result<(), DomainError>;
}

/// Receives the full collection after every successful mutation.
pub trait NoteObserver {
    fn notes_changed(&mut self, notes: &[Note]);
}

impl<F: FnMut(&[Note])> NoteObserver for F {
    fn notes_changed(&mut self, notes: &[Note]) {
        self(notes)
    }
}

/// Owns the ordered note collection and keeps the persisted snapshot in step with it.
///
/// Storage failures never abort a mutation: a failed load starts the store empty,
/// a failed write leaves memory authoritative. Both are logged and kept for
/// inspection through [`NoteStore::load_error`] and [`NoteStore::save_error`].
pub struct NoteStore<R: NoteRepository> {
    repository: R,
    notes: Vec<Note>,
    observers: Vec<Box<dyn NoteObserver>>,
    load_error: Option<DomainError>,
    save_error: Option<DomainError>,
}

impl<R: NoteRepository> NoteStore<R> {
    pub fn open(mut repository: R) -> Self {
        let (notes, load_error) = match repository.load_notes() {
            Ok(notes) => {
                debug!(count = notes.len(), "Loaded notes");
                (notes, None)
            }
            Err(e) => {
                error!(error = %e, "Failed to load notes, starting with an empty list");
                (Vec::new(), Some(e))
            }
        };

        Self {
            repository,
            notes,
            observers: Vec::new(),
            load_error,
            save_error: None,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    pub fn load_error(&self) -> Option<&DomainError> {
        self.load_error.as_ref()
    }

    /// Failure of the most recent write, cleared by the next successful one.
    pub fn save_error(&self) -> Option<&DomainError> {
        self.save_error.as_ref()
    }

    pub fn subscribe(&mut self, observer: Box<dyn NoteObserver>) {
        self.observers.push(observer);
    }

    /// Append a new note. Rejected without mutation when title, description and
    /// due date are all blank; any other input, including malformed dates, is kept as is.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, title: &str, description: &str, due_date: &str) -> Result<Note, DomainError> {
        if is_blank_entry(title, description, due_date) {
            debug!("Rejecting blank note");
            return Err(DomainError::Validation);
        }

        let note = Note::new(self.fresh_id(), title, description, due_date);
        info!(id = %note.id, "Added note");
        self.notes.push(note.clone());
        self.commit();
        Ok(note)
    }

    /// Remove the note with `id`. Absent ids are a no-op.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: &str) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        let removed = self.notes.remove(idx);
        info!(id, "Removed note");
        self.commit();
        Some(removed)
    }

    /// Flip `completed` on the note with `id` and return the new value.
    /// Absent ids are a no-op.
    #[instrument(level = "debug", skip(self))]
    pub fn toggle_complete(&mut self, id: &str) -> Option<bool> {
        let note = self.notes.iter_mut().find(|n| n.id == id)?;
        note.completed = !note.completed;
        let completed = note.completed;
        info!(id, completed, "Toggled note");
        self.commit();
        Some(completed)
    }

    /// Write the current snapshot and report the outcome to the caller.
    pub fn save(&mut self) -> Result<(), DomainError> {
        match self.repository.save_notes(&self.notes) {
            Ok(()) => {
                self.save_error = None;
                Ok(())
            }
            Err(e) => {
                self.save_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Resolve a full id or a unique id prefix to the note's id.
    pub fn resolve_id(&self, prefix: &str) -> Result<String, DomainError> {
        if let Some(note) = self.get(prefix) {
            return Ok(note.id.clone());
        }
        if prefix.is_empty() {
            return Err(DomainError::NoteNotFound(prefix.to_string()));
        }

        let mut matches = self.notes.iter().filter(|n| n.id.starts_with(prefix));
        match (matches.next(), matches.count()) {
            (None, _) => Err(DomainError::NoteNotFound(prefix.to_string())),
            (Some(note), 0) => Ok(note.id.clone()),
            (Some(_), rest) => Err(DomainError::AmbiguousId {
                prefix: prefix.to_string(),
                matches: rest + 1,
            }),
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn commit(&mut self) {
        match self.repository.save_notes(&self.notes) {
            Ok(()) => self.save_error = None,
            Err(e) => {
                error!(error = %e, "Failed to save notes, keeping changes in memory");
                self.save_error = Some(e);
            }
        }

        for observer in self.observers.iter_mut() {
            observer.notes_changed(&self.notes);
        }
    }
}
