// crates/infra/src/filesystem.rs
use std::path::Path;

use latest_migration_domain::DirectoryEntry;
use latest_migration_ports::filesystem::MigrationFs;
use latest_migration_shared_kernel::{InfrastructureError, Result};
use tracing::debug;

/// `MigrationFs` backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdMigrationFs;

impl StdMigrationFs {
    pub fn new() -> Self {
        Self
    }
}

impl MigrationFs for StdMigrationFs {
    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }

    fn list_dir(&self, dir: &Path) -> Result<Vec<DirectoryEntry>> {
        let read_err = |source: std::io::Error| InfrastructureError::DirectoryRead { path: dir.to_path_buf(), source };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            // A lossy name would point at a folder that does not exist.
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    debug!(name = ?raw, "skipping entry with a non UTF-8 name");
                    continue;
                }
            };
            // file_type() does not follow symlinks: a link to a directory is not a directory here.
            let is_dir = entry.file_type().map_err(read_err)?.is_dir();
            entries.push(DirectoryEntry { name, is_dir });
        }
        // read_dir order is platform dependent.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
