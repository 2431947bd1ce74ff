//! todo — single-user command-line todo list.
//!
//! # Usage
//!
//! ```text
//! todo add <title>
//! todo list
//! todo done <id>
//! todo --file <path> <command>
//! ```
//!
//! State lives in a JSON file (default `todos.json` in the current working
//! directory); every invocation reloads it in full and mutations rewrite it
//! atomically.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{add::AddArgs, done::DoneArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    version,
    about = "Add, list, and mark todos as done",
    long_about = None,
)]
struct Cli {
    /// Path to the todo store file.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        default_value = "todos.json"
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new todo item.
    Add(AddArgs),

    /// List all todo items.
    List,

    /// Mark a todo item as done.
    Done(DoneArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Add(args) => args.run(&cli.file),
        Commands::List => commands::list::run(&cli.file),
        Commands::Done(args) => args.run(&cli.file),
    }
}
