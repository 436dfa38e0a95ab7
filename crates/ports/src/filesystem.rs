// crates/ports/src/filesystem.rs
use std::path::Path;

use latest_migration_domain::DirectoryEntry;
use latest_migration_shared_kernel::Result;

/// Port for the handful of filesystem queries migration discovery needs.
pub trait MigrationFs {
    /// Whether anything exists at `path`. Errors count as "does not exist".
    fn exists(&self, path: &Path) -> bool;

    /// Immediate children of `dir` with their directory flag.
    ///
    /// # Errors
    /// Returns `InfrastructureError::DirectoryRead` when `dir` cannot be listed.
    fn list_dir(&self, dir: &Path) -> Result<Vec<DirectoryEntry>>;
}
