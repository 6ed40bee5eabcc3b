// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

/// Shared mock repository for testing code that depends on NoteRepository
///
/// Loads a configured snapshot (or a configured failure) and records every
/// snapshot it is asked to save.
///
/// # Examples
///
/// ```
/// use notelist::application::NoteStore;
/// use notelist::domain::Note;
/// use notelist::util::testing::MockNoteRepository;
///
/// let mock = MockNoteRepository::builder()
///     .with_notes(vec![Note::new("a1", "Buy milk", "", "2025-04-25")])
///     .build();
/// let mut store = NoteStore::open(mock);
/// store.toggle_complete("a1");
///
/// assert_eq!(store.repository().save_count(), 1);
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    load_failure: Option<String>,
    successful_saves: Option<usize>,
    saved: Vec<Vec<Note>>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Number of save calls, failed ones included
    pub fn save_count(&self) -> usize {
        self.saved.len()
    }

    pub fn last_saved(&self) -> Option<Vec<Note>> {
        self.saved.last().cloned()
    }
}

impl NoteRepository for MockNoteRepository {
    fn load_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        match &self.load_failure {
            Some(reason) => Err(DomainError::StorageRead(reason.clone())),
            None => Ok(self.notes.clone()),
        }
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        self.saved.push(notes.to_vec());
        if self.successful_saves.is_some_and(|limit| self.saved.len() > limit) {
            return Err(DomainError::StorageWrite("quota exceeded".to_string()));
        }
        self.notes = notes.to_vec();
        Ok(())
    }
}

/// Builder for MockNoteRepository
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    load_failure: Option<String>,
    successful_saves: Option<usize>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            load_failure: None,
            successful_saves: None,
        }
    }

    /// Snapshot returned by load_notes
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    /// Make load_notes fail with StorageRead
    pub fn with_load_failure(mut self, reason: &str) -> Self {
        self.load_failure = Some(reason.to_string());
        self
    }

    /// Make every save_notes fail with StorageWrite
    pub fn with_save_failure(self) -> Self {
        self.with_save_failure_after(0)
    }

    /// Let the first `count` saves succeed and fail every later one
    pub fn with_save_failure_after(mut self, count: usize) -> Self {
        self.successful_saves = Some(count);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            load_failure: self.load_failure,
            successful_saves: self.successful_saves,
            saved: vec![],
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
