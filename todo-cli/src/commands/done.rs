//! `todo done <id>`

use std::path::Path;

use anyhow::{anyhow, Result};
use clap::Args;

use todo_core::{TodoError, TodoId, TodoManager, TodoStore};

/// Mark a todo item as done.
#[derive(Args, Debug)]
pub struct DoneArgs {
    /// Id of the todo to complete.
    pub id: u64,
}

impl DoneArgs {
    pub fn run(self, file: &Path) -> Result<()> {
        let manager = TodoManager::new(TodoStore::new(file));
        let id = TodoId::from(self.id);

        // One load up front: the already-done notice is a success, and the
        // success message needs the title anyway.
        let todos = manager
            .list_all()
            .map_err(|e| anyhow!("Failed to save todo: {e}"))?;
        let todo = todos.iter().find(|t| t.id == id);
        if let Some(todo) = todo {
            if todo.done {
                println!("Todo #{id} is already done");
                return Ok(());
            }
        }

        match manager.mark_done(id) {
            Ok(()) => {
                let title = todo.map(|t| t.title.as_str()).unwrap_or_default();
                println!("Marked todo #{id} as done: \"{title}\"");
                Ok(())
            }
            Err(TodoError::AlreadyDone { id }) => {
                println!("Todo #{id} is already done");
                Ok(())
            }
            Err(TodoError::Store(e)) => Err(anyhow!("Failed to save todo: {e}")),
            Err(e) => Err(anyhow!(e)),
        }
    }
}
