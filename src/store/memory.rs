//! In-memory todo store
//!
//! Behaves like the PostgreSQL store (sequential ids starting at 1, storage
//! order equal to insertion order, zero-row update/delete reported as
//! `NotFound`) without needing a database. Used by tests and `--in-memory`.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::model::{Todo, TodoId};

use super::{StoreError, StoreResult, TodoStore};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<TodoId, Todo>,
    next_id: TodoId,
}

impl Table {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Todo store backed by an ordered map
#[derive(Debug)]
pub struct InMemoryTodoStore {
    table: RwLock<Table>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }

    /// Remove every row and restart the id sequence at 1
    pub fn clear(&self) -> StoreResult<()> {
        let mut table = self.table.write().map_err(|_| Self::poisoned())?;
        *table = Table::new();
        Ok(())
    }

    fn poisoned() -> StoreError {
        StoreError::Storage("Lock poisoned".to_string())
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list_all(&self) -> StoreResult<Vec<Todo>> {
        let table = self.table.read().map_err(|_| Self::poisoned())?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: TodoId) -> StoreResult<Todo> {
        let table = self.table.read().map_err(|_| Self::poisoned())?;
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn insert(&self, text: &str) -> StoreResult<Todo> {
        let mut table = self.table.write().map_err(|_| Self::poisoned())?;

        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Storage("id sequence exhausted".to_string()))?;

        let todo = Todo {
            id,
            todo: text.to_string(),
            completed: false,
        };
        table.rows.insert(id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, text: &str, completed: bool) -> StoreResult<Todo> {
        let mut table = self.table.write().map_err(|_| Self::poisoned())?;

        let row = table.rows.get_mut(&id).ok_or(StoreError::NotFound)?;
        row.todo = text.to_string();
        row.completed = completed;
        Ok(row.clone())
    }

    async fn delete_by_id(&self, id: TodoId) -> StoreResult<()> {
        let mut table = self.table.write().map_err(|_| Self::poisoned())?;
        table.rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    async fn ensure_table(&self) -> StoreResult<()> {
        Ok(())
    }
}
