//! todo-service entry point
//!
//! Parses arguments and hands off to the CLI module. Errors go to stderr and
//! the process exits with status 1.

use todo_service::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
