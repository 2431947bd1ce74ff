//! JSON file storage for the todo sequence.
//!
//! Persists the full list as a JSON array at a configured path. Writes use an
//! atomic `.tmp` + rename pattern: a reader never observes a partially-written
//! file, and a crash mid-write leaves the previous version intact. There is no
//! cross-process lock — concurrent writers race and the last rename wins.

use std::path::{Path, PathBuf};

use crate::error::{io_err, StoreError};
use crate::types::Todo;

/// JSON-file-backed store for the full todo sequence.
///
/// The path is explicit configuration; nothing is derived from the
/// environment. The file is not touched until the first [`save`](Self::save).
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured store path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full todo sequence in file order.
    ///
    /// A missing file is an empty store, not an error. A file that is empty or
    /// does not parse as an array of `{id, title, done}` records is also
    /// treated as empty; the reset is logged at `warn` level. Read failures
    /// propagate.
    pub fn load(&self) -> Result<Vec<Todo>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| io_err(&self.path, e))?;
        match serde_json::from_str::<Vec<Todo>>(&contents) {
            Ok(todos) => {
                log::debug!("loaded {} todo(s) from {}", todos.len(), self.path.display());
                Ok(todos)
            }
            Err(e) => {
                log::warn!(
                    "malformed todo store at {} ({e}); treating as empty",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Save the full todo sequence, atomically replacing the previous file.
    ///
    /// Writes to a `.json.tmp` sibling (same directory, so the rename never
    /// crosses filesystems) then renames onto the target. The tmp file is
    /// removed if either step fails, and the error propagates.
    pub fn save(&self, todos: &[Todo]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(todos)?;
        let tmp = self.path.with_extension("json.tmp");

        if let Err(e) = std::fs::write(&tmp, &json) {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_err(&tmp, e));
        }
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_err(&self.path, e));
        }
        log::debug!("wrote {} todo(s) to {}", todos.len(), self.path.display());
        Ok(())
    }
}
