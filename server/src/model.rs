//! Record and payload types served by the todo API.
//!
//! # Design
//! `Todo` is the record held by the store and returned on the wire. Field
//! names are camelCase in JSON (`createdAt`). Request payloads keep their
//! fields optional or loosely typed where the handler, not serde, decides
//! which error to report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a todo by the store.
pub type TodoId = u64;

/// A single todo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/todos`.
///
/// `text` is optional so a missing field reaches the store and produces the
/// validation error rather than a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of `PATCH /api/todos/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub completed: bool,
}

/// Parse a path segment into a `TodoId`.
///
/// Anything that is not a plain unsigned decimal integer yields `None`, which
/// callers report the same way as an unknown id.
pub fn parse_id(raw: &str) -> Option<TodoId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
