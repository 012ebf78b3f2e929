//! todo-service - JSON CRUD API for todo items backed by PostgreSQL

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod store;
