//! Observability for the todo service
//!
//! Logging goes through `tracing`. The subscriber is installed once by the
//! CLI; library code only emits events.

mod logger;

pub use logger::{init_logging, LogFormat};
