//! CLI command definitions and dispatch.

pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use catalog_core::config::AppConfig;
use catalog_core::error::AppError;

/// Service catalog administration
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the catalog server
    Serve(serve::ServeArgs),
    /// Run pending database migrations
    Migrate,
    /// Populate the store with generated sample data
    Seed(seed::SeedArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate => migrate::execute(&self.env).await,
            Commands::Seed(args) => seed::execute(args, &self.env).await,
        }
    }
}

/// Helper: load configuration for the selected environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    let pool = catalog_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
