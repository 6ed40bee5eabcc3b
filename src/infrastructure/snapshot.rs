// src/infrastructure/snapshot.rs
use crate::application::NoteRepository;
use crate::constants::DEFAULT_STORAGE_KEY;
use crate::domain::{DomainError, Note};
use crate::infrastructure::kv_store::KeyValueStore;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Persists the whole note collection as one JSON array under a single key.
pub struct SnapshotRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SnapshotRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> NoteRepository for SnapshotRepository<S> {
    #[instrument(level = "debug", skip(self), fields(key = %self.key))]
    fn load_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let stored = self.store.get(&self.key)?;
        let Some(raw) = stored.filter(|raw| !raw.trim().is_empty()) else {
            info!("No notes found in storage");
            return Ok(Vec::new());
        };

        let notes: Vec<Note> = serde_json::from_str(&raw)
            .map_err(|e| DomainError::StorageRead(format!("Malformed snapshot: {}", e)))?;

        let duplicate = {
            let mut seen = HashSet::with_capacity(notes.len());
            notes
                .iter()
                .find(|n| !seen.insert(n.id.as_str()))
                .map(|n| n.id.clone())
        };
        if let Some(id) = duplicate {
            return Err(DomainError::StorageRead(format!(
                "Malformed snapshot: duplicate note id {}",
                id
            )));
        }

        debug!(count = notes.len(), "Parsed snapshot");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self, notes), fields(key = %self.key, count = notes.len()))]
    fn save_notes(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        let raw = serde_json::to_string(notes)
            .map_err(|e| DomainError::StorageWrite(format!("Failed to serialize notes: {}", e)))?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::kv_store::MemoryKeyValueStore;
    use rstest::rstest;

    #[test]
    fn given_empty_store_when_loading_then_returns_empty_list() {
        let mut repo = SnapshotRepository::new(MemoryKeyValueStore::new());

        assert!(repo.load_notes().unwrap().is_empty());
    }

    #[test]
    fn given_saved_notes_when_loading_then_returns_same_notes_in_order() {
        let mut repo = SnapshotRepository::new(MemoryKeyValueStore::new());
        let mut done = Note::new("b", "Second", "", "not-a-date");
        done.completed = true;
        let notes = vec![Note::new("a", "First", "line one\nline two", "2025-04-25"), done];

        repo.save_notes(&notes).unwrap();

        assert_eq!(repo.load_notes().unwrap(), notes);
    }

    #[test]
    fn given_saved_notes_when_inspecting_raw_value_then_uses_camel_case_keys() {
        let mut repo = SnapshotRepository::with_key(MemoryKeyValueStore::new(), "custom");

        repo.save_notes(&[Note::new("a", "t", "d", "2025-04-25")]).unwrap();

        let raw = repo.store().get("custom").unwrap().expect("Value should exist");
        assert_eq!(
            raw,
            r#"[{"id":"a","title":"t","description":"d","dueDate":"2025-04-25","completed":false}]"#
        );
    }

    #[rstest]
    #[case("")]
    #[case("  \n")]
    fn test_blank_snapshot_loads_as_empty_list(#[case] raw: &str) {
        let mut store = MemoryKeyValueStore::new();
        store.insert_raw(DEFAULT_STORAGE_KEY, raw);
        let mut repo = SnapshotRepository::new(store);

        assert!(repo.load_notes().unwrap().is_empty());
    }

    #[test]
    fn given_invalid_json_when_loading_then_returns_storage_read() {
        let mut store = MemoryKeyValueStore::new();
        store.insert_raw(DEFAULT_STORAGE_KEY, "{not json");
        let mut repo = SnapshotRepository::new(store);

        assert!(matches!(repo.load_notes(), Err(DomainError::StorageRead(_))));
    }

    #[test]
    fn given_wrong_shape_when_loading_then_returns_storage_read() {
        let mut store = MemoryKeyValueStore::new();
        store.insert_raw(DEFAULT_STORAGE_KEY, r#"[{"id":"a","title":"t"}]"#);
        let mut repo = SnapshotRepository::new(store);

        assert!(matches!(repo.load_notes(), Err(DomainError::StorageRead(_))));
    }

    #[test]
    fn given_null_snapshot_when_loading_then_returns_storage_read() {
        let mut store = MemoryKeyValueStore::new();
        store.insert_raw(DEFAULT_STORAGE_KEY, "null");
        let mut repo = SnapshotRepository::new(store);

        assert!(matches!(repo.load_notes(), Err(DomainError::StorageRead(_))));
    }

    #[test]
    fn given_duplicate_ids_when_loading_then_returns_storage_read() {
        let mut repo = SnapshotRepository::new(MemoryKeyValueStore::new());
        repo.save_notes(&[Note::new("a", "one", "", ""), Note::new("a", "two", "", "")])
            .unwrap();

        match repo.load_notes() {
            Err(DomainError::StorageRead(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("Expected StorageRead, got {:?}", other),
        }
    }

    #[test]
    fn given_quota_exceeded_when_saving_then_returns_storage_write() {
        let mut repo = SnapshotRepository::new(MemoryKeyValueStore::with_quota(20));

        let result = repo.save_notes(&[Note::new("a", "a long title", "", "")]);

        assert!(matches!(result, Err(DomainError::StorageWrite(_))));
    }
}
