//! CLI argument definitions using clap
//!
//! Commands:
//! - todo-service init [db options]
//! - todo-service start [server options] [db options] [--in-memory]
//!
//! Every option can also be supplied through its environment variable.

use clap::{Args, Parser, Subcommand};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::store::DatabaseConfig;

use super::errors::{CliError, CliResult};

/// todo-service - JSON CRUD API for todo items
#[derive(Parser, Debug)]
#[command(name = "todo-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log output format
    #[arg(
        long,
        env = "APP_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Json,
        global = true
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the todos table if it does not exist, then exit
    Init {
        #[command(flatten)]
        db: DatabaseArgs,
    },

    /// Start the HTTP server
    Start {
        #[command(flatten)]
        server: ServerArgs,

        #[command(flatten)]
        db: DatabaseArgs,

        /// Keep todos in process memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },
}

/// Database connection options
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database host
    #[arg(long, env = "APP_DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "APP_DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "APP_DB_USERNAME")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "APP_DB_PASSWORD", hide_env_values = true, default_value = "")]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "APP_DB_NAME")]
    pub db_name: Option<String>,
}

impl DatabaseArgs {
    /// Resolve into a connection config; user and database name are required
    pub fn to_config(&self) -> CliResult<DatabaseConfig> {
        let user = self.db_user.clone().ok_or_else(|| {
            CliError::config_error("database user is required (--db-user or APP_DB_USERNAME)")
        })?;
        let dbname = self.db_name.clone().ok_or_else(|| {
            CliError::config_error("database name is required (--db-name or APP_DB_NAME)")
        })?;

        Ok(DatabaseConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user,
            password: self.db_password.clone(),
            dbname,
        })
    }
}

/// HTTP listener options
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, env = "APP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "APP_PORT", default_value_t = 8010)]
    pub port: u16,
}

impl ServerArgs {
    pub fn to_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
