//! PostgreSQL Store Tests
//!
//! Runs against a live database configured through `APP_DB_USERNAME`,
//! `APP_DB_PASSWORD`, `APP_DB_NAME` (and optionally `APP_DB_HOST`,
//! `APP_DB_PORT`). Ignored by default:
//!
//! ```text
//! cargo test --test postgres_store -- --ignored --test-threads=1
//! ```
//!
//! Every test clears the table first, so they must not run in parallel.

use std::env;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use todo_service::http_server::HttpServer;
use todo_service::store::{DatabaseConfig, PgTodoStore, StoreError, TodoStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn config_from_env() -> DatabaseConfig {
    let mut config = DatabaseConfig::new(
        env::var("APP_DB_USERNAME").unwrap_or_else(|_| "postgres".to_string()),
        env::var("APP_DB_PASSWORD").unwrap_or_default(),
        env::var("APP_DB_NAME").unwrap_or_else(|_| "postgres".to_string()),
    );
    if let Ok(host) = env::var("APP_DB_HOST") {
        config.host = host;
    }
    if let Some(port) = env::var("APP_DB_PORT").ok().and_then(|p| p.parse().ok()) {
        config.port = port;
    }
    config
}

async fn fresh_store() -> PgTodoStore {
    let store = PgTodoStore::connect(&config_from_env()).await.unwrap();
    store.ensure_table().await.unwrap();
    store.clear().await.unwrap();
    store
}

async fn execute(
    store: &PgTodoStore,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let router = HttpServer::build_router(Arc::new(store.clone()));
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Store Operations
// =============================================================================

#[tokio::test]
#[ignore]
async fn test_ensure_table_is_idempotent() {
    let store = fresh_store().await;
    store.ensure_table().await.unwrap();
    store.ensure_table().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_insert_uses_column_default() {
    let store = fresh_store().await;

    let todo = store.insert("defaults").await.unwrap();

    assert_eq!(todo.id, 1);
    assert!(!todo.completed);
}

#[tokio::test]
#[ignore]
async fn test_completed_column_rejects_null() {
    let store = fresh_store().await;

    let result = sqlx::query("INSERT INTO todos(todo, completed) VALUES($1, NULL)")
        .bind("null completed")
        .execute(store.pool())
        .await;

    assert!(result.is_err());
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_zero_row_writes_are_not_found() {
    let store = fresh_store().await;

    assert_eq!(store.get_by_id(43).await, Err(StoreError::NotFound));
    assert_eq!(store.update(43, "x", true).await, Err(StoreError::NotFound));
    assert_eq!(store.delete_by_id(43).await, Err(StoreError::NotFound));
}

// =============================================================================
// HTTP Behaviour
// =============================================================================

#[tokio::test]
#[ignore]
async fn test_empty_table() {
    let store = fresh_store().await;

    let (status, body) = execute(&store, Method::GET, "/todos", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
#[ignore]
async fn test_get_non_existent_todo() {
    let store = fresh_store().await;

    let (status, body) = execute(&store, Method::GET, "/todo/43", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Todo Not Found");
}

#[tokio::test]
#[ignore]
async fn test_add_todo() {
    let store = fresh_store().await;

    let payload = r#"{"todo": "Add Test Todo"}"#;
    let (status, body) = execute(&store, Method::POST, "/todo", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["todo"], "Add Test Todo");
    assert_eq!(body["completed"], false);
}

#[tokio::test]
#[ignore]
async fn test_get_todo() {
    let store = fresh_store().await;
    sqlx::query("INSERT INTO todos(todo) VALUES($1)")
        .bind("Test Get Todo Add")
        .execute(store.pool())
        .await
        .unwrap();

    let (status, body) = execute(&store, Method::GET, "/todo/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todo"], "Test Get Todo Add");
}

#[tokio::test]
#[ignore]
async fn test_update_todo() {
    let store = fresh_store().await;
    store.insert("Test Update Todo Add").await.unwrap();

    let (status, body) = execute(
        &store,
        Method::PUT,
        "/todo/1",
        Some(r#"{"todo": "Updated todo", "completed": true}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["todo"], "Updated todo");
    assert_eq!(body["completed"], true);
}

#[tokio::test]
#[ignore]
async fn test_delete_todo() {
    let store = fresh_store().await;
    store.insert("Delete this").await.unwrap();

    let (status, _) = execute(&store, Method::GET, "/todo/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = execute(&store, Method::DELETE, "/todo/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "success");

    let (status, _) = execute(&store, Method::GET, "/todo/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
