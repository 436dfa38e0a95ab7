// crates/usecase/src/orchestrator.rs
use std::path::PathBuf;

use latest_migration_domain::{AppConfig, DbShellCommand, LatestMigration, MigrationAction};
use latest_migration_ports::action::ActionExecutor;
use latest_migration_ports::filesystem::MigrationFs;
use latest_migration_shared_kernel::Result;
use tracing::info;

use crate::locator::{LatestMigrationLocator, LocateOutcome};
use crate::resolver::MigrationsPathResolver;

/// Per-invocation overrides coming from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationRequest {
    /// Tried before every configured fallback.
    pub custom_path: Option<PathBuf>,
    /// Takes precedence over `AppConfig::db_name`.
    pub db_name: Option<String>,
    /// OR-ed with `AppConfig::auto_confirm`.
    pub auto_confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    NoMigrations { migrations_dir: PathBuf },
    Copied {
        migration: LatestMigration,
        /// Present when a database name is known.
        suggested_command: Option<String>,
    },
    Executed {
        migration: LatestMigration,
        command: String,
        output: String,
    },
    Skipped { migration: LatestMigration },
}

/// Resolve the directory, find the newest migration and act on it.
pub struct HandleLatestMigration<'a> {
    fs: &'a dyn MigrationFs,
    executor: &'a mut dyn ActionExecutor,
    config: &'a AppConfig,
    cwd: PathBuf,
}

impl<'a> HandleLatestMigration<'a> {
    pub fn new(
        fs: &'a dyn MigrationFs,
        executor: &'a mut dyn ActionExecutor,
        config: &'a AppConfig,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self { fs, executor, config, cwd: cwd.into() }
    }

    /// # Errors
    /// Propagates resolution, listing, missing SQL file, prompt and external
    /// command failures. "No migrations" and "skip" are successful outcomes.
    pub fn run(&mut self, request: &MigrationRequest) -> Result<MigrationOutcome> {
        let resolver = MigrationsPathResolver::new(self.fs, &self.cwd, &self.config.migrations_dir);
        let migrations_dir = resolver.resolve(request.custom_path.as_deref())?;

        let migration = match LatestMigrationLocator::new(self.fs).find_latest(&migrations_dir)? {
            LocateOutcome::Found(migration) => migration,
            LocateOutcome::NoMigrations => {
                return Ok(MigrationOutcome::NoMigrations { migrations_dir });
            }
        };

        let db_name = request.db_name.as_deref().or(self.config.db_name.as_deref());
        let auto_confirm = request.auto_confirm || self.config.auto_confirm;

        let action = match db_name {
            Some(_) if !auto_confirm => {
                let message = format!(
                    "Latest migration found: {}\n{}",
                    migration.sql_path.display(),
                    MigrationAction::PROMPT
                );
                MigrationAction::from_choice(&self.executor.prompt(&message)?)
            }
            _ => MigrationAction::Copy,
        };

        if let Some(db) = db_name
            && (action == MigrationAction::Execute || auto_confirm)
        {
            let command = DbShellCommand::new(&self.config.db_cli, db, &migration.sql_path);
            info!("Executing: {command}");
            let output = self.executor.run(&command)?;
            return Ok(MigrationOutcome::Executed {
                migration,
                command: command.to_string(),
                output,
            });
        }

        if action == MigrationAction::Skip {
            return Ok(MigrationOutcome::Skipped { migration });
        }

        let suggested_command = db_name
            .map(|db| DbShellCommand::new(&self.config.db_cli, db, &migration.sql_path).suggestion());
        Ok(MigrationOutcome::Copied { migration, suggested_command })
    }
}
