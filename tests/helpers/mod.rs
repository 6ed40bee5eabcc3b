use anyhow::{Context, Result};
use notelist::application::NoteStore;
use notelist::constants::DEFAULT_STORAGE_KEY;
use notelist::infrastructure::{FileKeyValueStore, FileNoteRepository};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for a data directory living in a temp dir
#[allow(dead_code)]
pub struct TestDataDir {
    _temp_dir: TempDir,
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestDataDir {
    /// Create an empty data directory
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let data_dir = temp_dir.path().join("data");

        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
        })
    }

    /// Create a data directory whose snapshot file holds `raw`
    pub fn with_snapshot(raw: &str) -> Result<Self> {
        let dir = Self::new()?;
        std::fs::create_dir_all(&dir.data_dir).context("Failed to create data directory")?;
        std::fs::write(dir.snapshot_path(), raw).context("Failed to write snapshot fixture")?;
        Ok(dir)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", DEFAULT_STORAGE_KEY))
    }

    pub fn read_snapshot(&self) -> Result<String> {
        std::fs::read_to_string(self.snapshot_path()).context("Failed to read snapshot")
    }

    pub fn repository(&self) -> FileNoteRepository {
        FileNoteRepository::new(FileKeyValueStore::new(&self.data_dir))
    }

    /// Open a store the way the binary does at startup
    pub fn open_store(&self) -> NoteStore<FileNoteRepository> {
        NoteStore::open(self.repository())
    }
}

/// Snapshot fixtures
#[allow(dead_code)]
pub mod snapshots {
    pub const TWO_NOTES: &str = r#"[
  {"id":"11111111-aaaa-4aaa-8aaa-aaaaaaaaaaaa","title":"Buy milk","description":"","dueDate":"2025-04-25","completed":false},
  {"id":"22222222-bbbb-4bbb-8bbb-bbbbbbbbbbbb","title":"Call bank","description":"ask about fees","dueDate":"","completed":true}
]"#;

    pub const TRUNCATED: &str = r#"[{"id":"11111111","title":"Buy mi"#;

    pub const NOT_AN_ARRAY: &str = r#"{"notes":[]}"#;
}
