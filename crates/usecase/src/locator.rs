// crates/usecase/src/locator.rs
use std::path::Path;

use latest_migration_domain::LatestMigration;
use latest_migration_domain::layout::migration_sql_path;
use latest_migration_domain::selection::{collect_candidates, select_latest};
use latest_migration_ports::filesystem::MigrationFs;
use latest_migration_shared_kernel::{ApplicationError, Result};
use tracing::{debug, info};

/// Result of scanning a migrations directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateOutcome {
    Found(LatestMigration),
    /// No directory carried a valid `YYYYMMDDHHMMSS_` prefix.
    NoMigrations,
}

pub struct LatestMigrationLocator<'a> {
    fs: &'a dyn MigrationFs,
}

impl<'a> LatestMigrationLocator<'a> {
    pub fn new(fs: &'a dyn MigrationFs) -> Self {
        Self { fs }
    }

    /// Select the newest migration folder under `migrations_dir` and confirm
    /// its `migration.sql` exists.
    ///
    /// # Errors
    /// - `InfrastructureError::DirectoryRead` if the directory cannot be listed
    /// - `ApplicationError::MissingSqlFile` if the winner has no SQL file
    pub fn find_latest(&self, migrations_dir: &Path) -> Result<LocateOutcome> {
        info!("Looking for migrations in: {}", migrations_dir.display());
        let entries = self.fs.list_dir(migrations_dir)?;
        debug!(?entries, "Found directories");

        let candidates = collect_candidates(&entries);
        if candidates.len() < entries.len() {
            debug!(
                skipped = entries.len() - candidates.len(),
                "ignored entries without a valid timestamp prefix"
            );
        }

        let Some(latest) = select_latest(&candidates) else {
            return Ok(LocateOutcome::NoMigrations);
        };

        let sql_path = migration_sql_path(migrations_dir, latest.name());
        if !self.fs.exists(&sql_path) {
            return Err(ApplicationError::MissingSqlFile { path: sql_path }.into());
        }

        Ok(LocateOutcome::Found(LatestMigration {
            migrations_dir: migrations_dir.to_path_buf(),
            name: latest.name().to_string(),
            sql_path,
        }))
    }
}
