// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Please fill in a title, a date or a description")]
    Validation,
    #[error("Failed to read notes from storage: {0}")]
    StorageRead(String),
    #[error("Failed to save notes to storage: {0}")]
    StorageWrite(String),
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Note id prefix '{prefix}' is ambiguous ({matches} notes match)")]
    AmbiguousId { prefix: String, matches: usize },
}
