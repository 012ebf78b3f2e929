//! # Todo Model
//!
//! The single persisted entity and the request bodies that mutate it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Primary key type, matches the `SERIAL` column of the `todos` table
pub type TodoId = i32;

/// A todo row as stored and as returned over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: TodoId,
    pub todo: String,
    pub completed: bool,
}

/// Body of `POST /todo`
///
/// `completed` is not accepted here; new rows always start out incomplete.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoRequest {
    pub todo: String,
}

/// Body of `PUT /todo/{id}`
///
/// Both fields are required: an update replaces the whole row.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoRequest {
    pub todo: String,
    pub completed: bool,
}

/// Body returned by `DELETE /todo/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
