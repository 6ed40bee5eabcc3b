// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use application::{NoteForm, NoteRepository, NoteStore};
use domain::DomainError;
use infrastructure::{config, Config, FileKeyValueStore, FileNoteRepository, PageRenderer};
use ports::{HtmlPresenter, TerminalPresenter, TerminalView};
use tracing::{debug, info, warn};

use crate::cli::args::{Args, Command};
use crate::cli::Shell;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notelist with arguments");

    // Initialize infrastructure
    let config = load_config(args.config.as_deref())?;
    let data_dir = match args.data_dir {
        Some(path) => {
            debug!(?path, "Using provided data directory");
            path
        }
        None => find_data_dir(&config)?,
    };
    let repository = open_repository(&data_dir, &config);

    // Initialize application
    let mut store = NoteStore::open(repository);

    // Execute use case
    match args.command {
        Command::Add {
            title,
            date,
            description,
        } => {
            store.subscribe(Box::new(TerminalView::new(io::stdout())));
            let mut form = NoteForm {
                title,
                date,
                description,
            };
            let note = form.submit(&mut store)?;
            info!(id = %note.id, "Note added");
        }
        Command::List { json } => {
            let mut stdout = io::stdout().lock();
            if json {
                let out = serde_json::to_string_pretty(store.notes())
                    .context("Failed to serialize notes")?;
                writeln!(stdout, "{}", out)?;
            } else {
                write!(stdout, "{}", TerminalPresenter::new().render(store.notes()))?;
            }
        }
        Command::Toggle { note_id } => {
            store.subscribe(Box::new(TerminalView::new(io::stdout())));
            if let Some(id) = resolve_note_id(&store, &note_id)? {
                store.toggle_complete(&id);
            }
        }
        Command::Remove { note_id } => {
            store.subscribe(Box::new(TerminalView::new(io::stdout())));
            if let Some(id) = resolve_note_id(&store, &note_id)? {
                store.remove(&id);
            }
        }
        Command::View => {
            let html = HtmlPresenter::new().render(store.notes());
            let mut renderer = PageRenderer::new();
            let path = renderer.create_temp_file(&html)?;
            info!(?path, "Opening note list in browser");
            renderer.open_in_browser(&path)?;
        }
        Command::Shell => {
            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), io::stdout());
            store.subscribe(Box::new(TerminalView::new(io::stdout())));
            shell.run(&mut store)?;
        }
    }

    if let Some(e) = store.save_error() {
        warn!(error = %e, "Latest changes are only kept in memory");
    }

    Ok(())
}

/// Look up a note by id or id prefix; an unknown id is a no-op, an ambiguous one an error.
fn resolve_note_id<R: NoteRepository>(store: &NoteStore<R>, prefix: &str) -> Result<Option<String>> {
    match store.resolve_id(prefix) {
        Ok(id) => Ok(Some(id)),
        Err(DomainError::NoteNotFound(_)) => {
            warn!(note_id = prefix, "No note with this id, nothing to do");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            debug!(?path, "Using provided config file");
            Config::load(path)
        }
        None => Config::load_or_default(config::default_config_path()?),
    }
}

pub fn find_data_dir(config: &Config) -> Result<PathBuf> {
    match config.data_dir() {
        Some(dir) => Ok(dir),
        None => config::default_data_dir(),
    }
}

pub fn open_repository(data_dir: &Path, config: &Config) -> FileNoteRepository {
    FileNoteRepository::with_key(FileKeyValueStore::new(data_dir), config.storage.key.clone())
}
