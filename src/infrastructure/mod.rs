// src/infrastructure/mod.rs
pub mod config;
pub mod kv_store;
pub mod renderer;
pub mod snapshot;

pub use config::Config;
pub use kv_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use renderer::PageRenderer;
pub use snapshot::SnapshotRepository;

/// Repository used by the binary: the snapshot stored as a file in the data directory
pub type FileNoteRepository = SnapshotRepository<FileKeyValueStore>;
