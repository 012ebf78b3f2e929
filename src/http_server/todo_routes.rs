//! Todo HTTP Routes
//!
//! Five routes, each a thin translation between one HTTP verb and one store
//! operation.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::model::{CreateTodoRequest, DeleteResponse, Todo, UpdateTodoRequest};
use crate::store::TodoStore;

use super::errors::{ApiError, ApiResult};
use super::extract::{JsonBody, TodoPath};

/// Store handle shared across handlers
pub type TodoState = Arc<dyn TodoStore>;

// ==================
// Todo Routes
// ==================

/// Create todo routes
pub fn todo_routes(store: TodoState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(list_todos_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/todo",
            post(create_todo_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/todo/:id",
            get(get_todo_handler)
                .put(update_todo_handler)
                .delete(delete_todo_handler)
                .fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        .with_state(store)
}

// ==================
// Handlers
// ==================

async fn list_todos_handler(State(store): State<TodoState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = store.list_all().await?;
    Ok(Json(todos))
}

async fn get_todo_handler(
    State(store): State<TodoState>,
    TodoPath(id): TodoPath,
) -> ApiResult<Json<Todo>> {
    let todo = store.get_by_id(id).await?;
    Ok(Json(todo))
}

async fn create_todo_handler(
    State(store): State<TodoState>,
    JsonBody(request): JsonBody<CreateTodoRequest>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let todo = store.insert(&request.todo).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo_handler(
    State(store): State<TodoState>,
    TodoPath(id): TodoPath,
    JsonBody(request): JsonBody<UpdateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    let todo = store
        .update(id, &request.todo, request.completed)
        .await?;
    Ok(Json(todo))
}

async fn delete_todo_handler(
    State(store): State<TodoState>,
    TodoPath(id): TodoPath,
) -> ApiResult<Json<DeleteResponse>> {
    store.delete_by_id(id).await?;
    Ok(Json(DeleteResponse::success()))
}

async fn not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}

async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
