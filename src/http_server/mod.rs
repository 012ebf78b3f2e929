//! # HTTP Server Module
//!
//! JSON REST surface for todo items.
//!
//! # Endpoints
//!
//! - `GET /todos` - List every todo
//! - `GET /todo/{id}` - Fetch one todo
//! - `POST /todo` - Create a todo
//! - `PUT /todo/{id}` - Replace a todo
//! - `DELETE /todo/{id}` - Delete a todo

pub mod config;
pub mod errors;
pub mod extract;
pub mod server;
pub mod todo_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use todo_routes::{todo_routes, TodoState};
