//! CLI command implementations
//!
//! `run` owns process setup: logging, the tokio runtime, and dispatch.

use std::sync::Arc;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::{InMemoryTodoStore, PgTodoStore, TodoStore};

use super::args::{Cli, Command, DatabaseArgs, ServerArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command to completion
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    init_logging(cli.log_format).map_err(|e| CliError::logging_error(e.to_string()))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_command(cli.command))
}

/// Run a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { db } => init(&db).await,
        Command::Start {
            server,
            db,
            in_memory,
        } => start(&server, &db, in_memory).await,
    }
}

/// Connect and create the todos table
pub async fn init(db: &DatabaseArgs) -> CliResult<()> {
    connect(db).await?;
    info!("todos table ready");
    Ok(())
}

/// Open the store and serve HTTP until shutdown
pub async fn start(server: &ServerArgs, db: &DatabaseArgs, in_memory: bool) -> CliResult<()> {
    let store: Arc<dyn TodoStore> = if in_memory {
        info!("using in-memory store");
        Arc::new(InMemoryTodoStore::new())
    } else {
        Arc::new(connect(db).await?)
    };

    HttpServer::new(server.to_config(), store).start().await?;
    Ok(())
}

async fn connect(db: &DatabaseArgs) -> CliResult<PgTodoStore> {
    let config = db.to_config()?;
    let store = PgTodoStore::connect(&config).await?;
    store.ensure_table().await?;
    Ok(store)
}
