// src/constants.rs
//
// Application-wide constants shared between the store, the presenters and the CLI.

/// Storage key the note snapshot lives under unless the config overrides it.
///
/// Used in: `infrastructure/config.rs`, `infrastructure/snapshot.rs`
pub const DEFAULT_STORAGE_KEY: &str = "notelist-notes";

/// Directory name below the platform data/config directories.
pub const APP_DIR_NAME: &str = "notelist";

/// Shown instead of a due date when the note has none.
pub const NO_DATE_PLACEHOLDER: &str = "No Date!";

/// Shown instead of a due date that does not parse as a calendar date.
pub const INVALID_DATE_PLACEHOLDER: &str = "Invalid Date!";

/// Display format for valid due dates, e.g. "Fri, Apr 25".
/// Carries no year, so the same day in different years renders identically.
pub const DUE_DATE_FORMAT: &str = "%a, %b %-d";

/// Delay in milliseconds after writing the HTML page before the process may exit.
///
/// The browser is spawned detached and must read the file before the temp
/// directory is dropped.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
