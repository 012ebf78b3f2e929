//! PostgreSQL todo store
//!
//! One statement per operation against a shared `PgPool`. Values are always
//! bound as parameters.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgConnectOptions, PgPool, PgSslMode};
use tracing::info;

use crate::model::{Todo, TodoId};

use super::{StoreError, StoreResult, TodoStore};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos
(
    id SERIAL,
    todo TEXT NOT NULL,
    completed BOOL NOT NULL DEFAULT false,
    CONSTRAINT todo_pkey PRIMARY KEY (id)
)";

/// Database connection settings, read once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database host (default: "localhost")
    #[serde(default = "default_host")]
    pub host: String,

    /// Database port (default: 5432)
    #[serde(default = "default_port")]
    pub port: u16,

    pub user: String,

    #[serde(default)]
    pub password: String,

    /// Database name
    pub dbname: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

impl DatabaseConfig {
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        dbname: impl Into<String>,
    ) -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: user.into(),
            password: password.into(),
            dbname: dbname.into(),
        }
    }

    /// Connection options; TLS is disabled
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(PgSslMode::Disable)
    }
}

/// Todo store backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool for the given config
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = PgPool::connect_with(config.connect_options()).await?;
        info!(
            host = %config.host,
            port = config.port,
            dbname = %config.dbname,
            "connected to database"
        );
        Ok(Self::new(pool))
    }

    /// The underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Remove every row and restart the id sequence at 1
    pub async fn clear(&self) -> StoreResult<()> {
        sqlx::query("DELETE FROM todos").execute(&self.pool).await?;
        sqlx::query("ALTER SEQUENCE todos_id_seq RESTART WITH 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list_all(&self) -> StoreResult<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>("SELECT id, todo, completed FROM todos")
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn get_by_id(&self, id: TodoId) -> StoreResult<Todo> {
        sqlx::query_as::<_, Todo>("SELECT id, todo, completed FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, text: &str) -> StoreResult<Todo> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos(todo) VALUES($1) RETURNING id, todo, completed",
        )
        .bind(text)
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn update(&self, id: TodoId, text: &str, completed: bool) -> StoreResult<Todo> {
        sqlx::query_as::<_, Todo>(
            "UPDATE todos SET todo = $1, completed = $2 WHERE id = $3 RETURNING id, todo, completed",
        )
        .bind(text)
        .bind(completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete_by_id(&self, id: TodoId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn ensure_table(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}
