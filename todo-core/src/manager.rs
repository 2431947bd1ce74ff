//! Business rules for todo creation and completion.
//!
//! The manager is stateless between calls: every operation re-reads the full
//! store and mutating operations rewrite it wholesale, reusing the store's
//! atomic-replace guarantee. Lookups are linear scans — at hand-entered list
//! scale no index is warranted.

use crate::error::TodoError;
use crate::store::TodoStore;
use crate::types::{Todo, TodoId};

/// Business-rule layer over a [`TodoStore`].
#[derive(Debug)]
pub struct TodoManager {
    store: TodoStore,
}

impl TodoManager {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Add a new todo with the next sequential id and persist it.
    ///
    /// The title is trimmed; a title empty after trimming is rejected before
    /// the store is read or written. Ids are `max + 1` (1 on an empty store)
    /// and never reused.
    pub fn add(&self, title: &str) -> Result<Todo, TodoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        let mut todos = self.store.load()?;
        let next_id = todos.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        let todo = Todo::new(TodoId(next_id), title);
        todos.push(todo.clone());
        self.store.save(&todos)?;
        log::debug!("added todo #{next_id}");
        Ok(todo)
    }

    /// All todos, unmodified, in file order. No side effects.
    pub fn list_all(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.store.load()?)
    }

    /// Mark the todo with `id` as done and persist the full sequence.
    ///
    /// Completion is one-way: a second call for the same id fails with
    /// [`TodoError::AlreadyDone`]. Neither error path writes the store.
    pub fn mark_done(&self, id: TodoId) -> Result<(), TodoError> {
        let mut todos = self.store.load()?;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound { id })?;
        if todo.done {
            return Err(TodoError::AlreadyDone { id });
        }
        todo.done = true;
        self.store.save(&todos)?;
        log::debug!("marked todo #{id} as done");
        Ok(())
    }
}
