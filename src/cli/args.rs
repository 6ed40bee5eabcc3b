// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding the notes snapshot (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a note; at least one of title, date or description is required
    Add {
        /// Note title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Due date, ISO-8601 (e.g. 2025-04-25)
        #[arg(long, value_name = "DATE", default_value = "")]
        date: String,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List all notes in insertion order
    List {
        /// Output the stored snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Flip a note between open and completed
    Toggle {
        /// Note ID or unique ID prefix
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Remove {
        /// Note ID or unique ID prefix
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Open the note list in the browser
    View,

    /// Interactive session: add, toggle and remove notes from a prompt
    Shell,
}
