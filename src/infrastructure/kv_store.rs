// src/infrastructure/kv_store.rs
use crate::domain::DomainError;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument, trace};

/// String key-value storage holding the persisted snapshot.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replace the value under `key`. On failure the previous value stays in place.
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}

/// Stores every key as `<key>.json` inside one directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        debug!(?root, "Creating FileKeyValueStore");
        Self { root }
    }

    fn path_for(&self, key: &str) -> Option<PathBuf> {
        let valid = !key.is_empty()
            && !key.contains("..")
            && !key.contains(['/', '\\'])
            && !key.starts_with('.');
        valid.then(|| self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    #[instrument(level = "debug", skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self
            .path_for(key)
            .ok_or_else(|| DomainError::StorageRead(format!("Invalid storage key: {key:?}")))?;

        match fs::read_to_string(&path) {
            Ok(value) => {
                trace!(?path, bytes = value.len(), "Read value");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::StorageRead(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    #[instrument(level = "debug", skip(self, value))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self
            .path_for(key)
            .ok_or_else(|| DomainError::StorageWrite(format!("Invalid storage key: {key:?}")))?;
        let write_err = |e: std::io::Error| {
            DomainError::StorageWrite(format!("Failed to write {}: {}", path.display(), e))
        };

        fs::create_dir_all(&self.root).map_err(write_err)?;

        // Write beside the target and rename over it so a crash never leaves half a snapshot.
        let mut tmp = NamedTempFile::new_in(&self.root).map_err(write_err)?;
        tmp.write_all(value.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&path).map_err(|e| write_err(e.error))?;

        trace!(?path, bytes = value.len(), "Wrote value");
        Ok(())
    }
}

/// In-memory store with an optional size quota, the way browser storage behaves.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes that would push the total size of keys and values past `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(bytes),
        }
    }

    /// Store a raw value without any quota check, e.g. to seed a corrupt snapshot.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        if let Some(quota) = self.quota_bytes {
            let previous = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            let needed = self.used_bytes() - previous + key.len() + value.len();
            if needed > quota {
                return Err(DomainError::StorageWrite(format!(
                    "Quota exceeded: {needed} bytes needed, {quota} allowed"
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
