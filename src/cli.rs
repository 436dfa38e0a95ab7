// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use latest_migration_shared_kernel::{PresentationError, PresentationResult};
use latest_migration_usecase::MigrationRequest;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "latest_migration",
    version = crate::VERSION,
    about = "Find the newest Prisma migration and copy its path, execute it, or skip"
)]
pub struct Args {
    /// Database name (overrides `dbName` from the config)
    pub db_name: Option<String>,

    /// Execute without asking (requires a database name)
    #[arg(short = 'a', long = "auto")]
    pub auto_confirm: bool,

    /// Migrations directory to try before the configured fallbacks
    #[arg(long, value_name = "PATH")]
    pub migrations_dir: Option<PathBuf>,

    /// JSON config file to use instead of ./default-config.json
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// # Errors
    /// Returns `PresentationError::InvalidValue` for empty string values.
    pub fn validate(&self) -> PresentationResult<()> {
        if let Some(db) = &self.db_name {
            reject_blank("DB_NAME", db)?;
        }
        if let Some(dir) = &self.migrations_dir {
            reject_blank("--migrations-dir", &dir.to_string_lossy())?;
        }
        Ok(())
    }

    pub fn to_request(&self) -> MigrationRequest {
        MigrationRequest {
            custom_path: self.migrations_dir.clone(),
            db_name: self.db_name.clone(),
            auto_confirm: self.auto_confirm,
        }
    }
}

fn reject_blank(flag: &str, value: &str) -> PresentationResult<()> {
    if value.trim().is_empty() {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
