//! Domain types for the todo store.
//!
//! The persisted record shape is exactly `{id, title, done}`; records carrying
//! any other property are rejected at deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A strongly-typed todo identifier.
///
/// Assigned sequentially starting at 1; never reused. Serializes as a bare
/// JSON integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

impl Todo {
    /// A fresh, not-yet-done todo.
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}
