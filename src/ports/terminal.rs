// src/ports/terminal.rs
use crate::application::NoteObserver;
use crate::domain::Note;
use crate::util::date::format_due_date;
use crate::util::text::{extract_first_line, truncate};
use std::fmt::Write as _;
use std::io::Write;
use tracing::warn;

const MAX_SUMMARY_CHARS: usize = 72;

/// Plain-text rendering of the note list.
#[derive(Debug, Default, Clone)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_note(&self, note: &Note) -> String {
        let marker = if note.completed { "[x]" } else { "[ ]" };
        let mut out = format!(
            "{} {}  {}  ({})\n",
            marker,
            note.short_id(),
            note.title,
            format_due_date(&note.due_date)
        );

        let summary = extract_first_line(&note.description);
        if !summary.is_empty() {
            let _ = writeln!(out, "             {}", truncate(&summary, MAX_SUMMARY_CHARS));
        }
        out
    }

    pub fn render(&self, notes: &[Note]) -> String {
        let mut out = String::from("All Tasks\n");
        if notes.is_empty() {
            out.push_str("No tasks yet.\n");
            return out;
        }
        for note in notes {
            out.push_str(&self.render_note(note));
        }
        out
    }
}

/// Redraws the list on a writer whenever the store changes.
pub struct TerminalView<W: Write> {
    out: W,
    presenter: TerminalPresenter,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            presenter: TerminalPresenter::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NoteObserver for TerminalView<W> {
    fn notes_changed(&mut self, notes: &[Note]) {
        let rendered = self.presenter.render(notes);
        if let Err(e) = self
            .out
            .write_all(rendered.as_bytes())
            .and_then(|_| self.out.flush())
        {
            warn!(error = %e, "Failed to redraw note list");
        }
    }
}
