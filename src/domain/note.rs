// src/domain/note.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO-8601 date as entered, or empty. Not validated.
    pub due_date: String,
    pub completed: bool,
}

impl Note {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            completed: false,
        }
    }

    /// First eight characters of the id, enough to address a note from the CLI.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

/// True when every field a user can type into is blank.
pub fn is_blank_entry(title: &str, description: &str, due_date: &str) -> bool {
    title.trim().is_empty() && description.trim().is_empty() && due_date.trim().is_empty()
}
