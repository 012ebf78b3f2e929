//! CLI module for the todo service
//!
//! Provides command-line interface for:
//! - init: Create the todos table
//! - start: Connect and serve the HTTP API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, DatabaseArgs, ServerArgs};
pub use commands::{init, run, run_command, start};
pub use errors::{CliError, CliErrorCode, CliResult};
