//! CLI command definitions and dispatch.

pub mod migrate;
pub mod report;
pub mod user;

use clap::{Parser, Subcommand};

use attend_api::{AppState, Stores};
use attend_core::config::AppConfig;
use attend_core::error::AppError;
use attend_database::DatabasePool;

use crate::output::OutputFormat;

/// Smart Attendance administration
#[derive(Debug, Parser)]
#[command(name = "attend-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
    /// Attendance reports
    Report(report::ReportArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::User(args) => user::execute(args, &self.config, self.format).await,
            Commands::Report(args) => report::execute(args, &self.config, self.format).await,
        }
    }
}

/// Load and validate configuration from file plus environment.
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    let config = AppConfig::load_file(config_path)?;
    config.validate()?;
    Ok(config)
}

/// Connect to the database and wire services over it.
pub async fn connect(config: AppConfig) -> Result<(DatabasePool, AppState), AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    let state = AppState::new(config, Stores::postgres(&db))?;
    Ok((db, state))
}
