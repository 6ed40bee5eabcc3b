// src/cli/shell.rs
use crate::application::{NoteForm, NoteRepository, NoteStore};
use crate::domain::DomainError;
use crate::ports::TerminalPresenter;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  add              fill in a new note (title, date, description)
  toggle <id>      mark a note completed / open again
  remove <id>      delete a note (alias: rm)
  list             show all notes (alias: ls)
  help             show this help
  quit             leave the shell (alias: exit)
";

/// Line-driven session over a note store: a prompt for commands and a form for new notes.
pub struct Shell<R: BufRead, W: Write> {
    input: R,
    output: W,
    form: NoteForm,
    presenter: TerminalPresenter,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            form: NoteForm::new(),
            presenter: TerminalPresenter::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input.
    pub fn run<Repo: NoteRepository>(&mut self, store: &mut NoteStore<Repo>) -> Result<()> {
        write!(self.output, "{}", self.presenter.render(store.notes()))?;
        writeln!(self.output, "Type 'help' for commands.")?;

        while let Some(line) = self.prompt("> ")? {
            let mut parts = line.split_whitespace();
            let Some(command) = parts.next() else {
                continue;
            };
            let argument = parts.next();
            debug!(command, ?argument, "Shell command");

            match (command, argument) {
                ("quit" | "exit", _) => break,
                ("help", _) => write!(self.output, "{}", HELP)?,
                ("list" | "ls", _) => write!(self.output, "{}", self.presenter.render(store.notes()))?,
                ("add", _) => self.add(store)?,
                ("toggle" | "remove" | "rm", None) => {
                    writeln!(self.output, "Usage: {} <id>", command)?
                }
                ("toggle", Some(prefix)) => {
                    if let Some(id) = self.resolve(store, prefix)? {
                        store.toggle_complete(&id);
                    }
                }
                ("remove" | "rm", Some(prefix)) => {
                    if let Some(id) = self.resolve(store, prefix)? {
                        store.remove(&id);
                    }
                }
                _ => writeln!(self.output, "Unknown command '{}'. Type 'help'.", command)?,
            }
        }
        Ok(())
    }

    fn add<Repo: NoteRepository>(&mut self, store: &mut NoteStore<Repo>) -> Result<()> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(());
        };
        let Some(date) = self.prompt("Date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(());
        };
        self.form.title = title;
        self.form.date = date;
        self.form.description = description;

        match self.form.submit(store) {
            Ok(note) => writeln!(self.output, "Added {}", note.short_id())?,
            Err(e @ DomainError::Validation) => writeln!(self.output, "! {}", e)?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn resolve<Repo: NoteRepository>(
        &mut self,
        store: &NoteStore<Repo>,
        prefix: &str,
    ) -> Result<Option<String>> {
        match store.resolve_id(prefix) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                warn!(error = %e, "Could not resolve note id");
                writeln!(self.output, "! {}", e)?;
                Ok(None)
            }
        }
    }

    /// Print `label` and read one line without its line ending. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use crate::util::testing::MockNoteRepository;
    use std::io::Cursor;

    fn run_session(store: &mut NoteStore<MockNoteRepository>, script: &str) -> String {
        let mut shell = Shell::new(Cursor::new(script.to_string()), Vec::new());
        shell.run(store).expect("Session should succeed");
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn given_add_command_when_filling_form_then_adds_note() {
        let mut store = NoteStore::open(MockNoteRepository::builder().build());

        let out = run_session(&mut store, "add\nBuy milk\n2025-04-25\n2 liters\nlist\nquit\n");

        assert_eq!(store.len(), 1);
        let note = &store.notes()[0];
        assert_eq!(note.title, "Buy milk");
        assert_eq!(note.due_date, "2025-04-25");
        assert_eq!(note.description, "2 liters");
        assert!(out.contains("Fri, Apr 25"));
    }

    #[test]
    fn given_blank_form_when_adding_then_shows_notice_and_continues() {
        let mut store = NoteStore::open(MockNoteRepository::builder().build());

        let out = run_session(&mut store, "add\n\n\n\nadd\nSecond try\n\n\n");

        assert!(out.contains("! Please fill in a title, a date or a description"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title, "Second try");
    }

    #[test]
    fn given_id_prefix_when_toggling_and_removing_then_mutates_store() {
        let mock = MockNoteRepository::builder()
            .with_notes(vec![
                Note::new("aaaa1111", "first", "", ""),
                Note::new("bbbb2222", "second", "", ""),
            ])
            .build();
        let mut store = NoteStore::open(mock);

        run_session(&mut store, "toggle aaaa\nrm bbbb\n");

        assert_eq!(store.len(), 1);
        assert!(store.notes()[0].completed);
    }

    #[test]
    fn given_unknown_id_when_toggling_then_reports_and_changes_nothing() {
        let mock = MockNoteRepository::builder()
            .with_notes(vec![Note::new("aaaa1111", "first", "", "")])
            .build();
        let mut store = NoteStore::open(mock);

        let out = run_session(&mut store, "toggle zzz\n");

        assert!(out.contains("! Note not found: zzz"));
        assert!(!store.notes()[0].completed);
        assert_eq!(store.repository().save_count(), 0);
    }

    #[test]
    fn given_unknown_command_when_running_then_prints_hint() {
        let mut store = NoteStore::open(MockNoteRepository::builder().build());

        let out = run_session(&mut store, "frobnicate\ntoggle\n");

        assert!(out.contains("Unknown command 'frobnicate'"));
        assert!(out.contains("Usage: toggle <id>"));
    }

    #[test]
    fn given_input_ends_mid_form_when_adding_then_discards_entry() {
        let mut store = NoteStore::open(MockNoteRepository::builder().build());

        run_session(&mut store, "add\nHalf a note\n");

        assert!(store.is_empty());
    }
}
