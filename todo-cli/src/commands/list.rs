//! `todo list`

use std::path::Path;

use anyhow::{anyhow, Result};

use todo_core::{TodoManager, TodoStore};

pub fn run(file: &Path) -> Result<()> {
    let manager = TodoManager::new(TodoStore::new(file));
    let todos = manager
        .list_all()
        .map_err(|e| anyhow!("Failed to load todos: {e}"))?;

    if todos.is_empty() {
        println!("No todos found");
        return Ok(());
    }

    for todo in &todos {
        let status = if todo.done { "✓" } else { " " };
        println!("[{status}] #{}: {}", todo.id, todo.title);
    }
    Ok(())
}
