//! `todo add <title>`

use std::path::Path;

use anyhow::{anyhow, Result};
use clap::Args;

use todo_core::{TodoError, TodoManager, TodoStore};

/// Add a new todo item.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Title of the new todo. Leading and trailing whitespace is trimmed.
    pub title: String,
}

impl AddArgs {
    pub fn run(self, file: &Path) -> Result<()> {
        let manager = TodoManager::new(TodoStore::new(file));
        match manager.add(&self.title) {
            Ok(todo) => {
                println!("Added todo #{}: \"{}\"", todo.id, todo.title);
                Ok(())
            }
            Err(TodoError::Store(e)) => Err(anyhow!("Failed to save todo: {e}")),
            Err(e) => Err(anyhow!(e)),
        }
    }
}
