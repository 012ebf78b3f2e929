//! # Todo Store
//!
//! Data access for the `todos` table. Every operation maps to exactly one
//! parameterized statement; there is no caching and no multi-statement
//! transaction.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Todo, TodoId};

pub use memory::InMemoryTodoStore;
pub use postgres::{DatabaseConfig, PgTodoStore};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No row matched the given id
    #[error("Todo Not Found")]
    NotFound,

    /// Any other failure reported by the database
    #[error("{0}")]
    Storage(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Storage(other.to_string()),
        }
    }
}

/// Data access operations for todo rows
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Fetch every row in storage order
    async fn list_all(&self) -> StoreResult<Vec<Todo>>;

    /// Fetch a single row
    async fn get_by_id(&self, id: TodoId) -> StoreResult<Todo>;

    /// Insert a row; the store assigns the id and `completed = false`
    async fn insert(&self, text: &str) -> StoreResult<Todo>;

    /// Overwrite both mutable fields of a row
    async fn update(&self, id: TodoId, text: &str, completed: bool) -> StoreResult<Todo>;

    /// Remove a row
    async fn delete_by_id(&self, id: TodoId) -> StoreResult<()>;

    /// Create the backing table if it does not exist yet
    async fn ensure_table(&self) -> StoreResult<()>;
}
