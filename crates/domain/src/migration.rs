// crates/domain/src/migration.rs
use std::path::PathBuf;

use crate::layout::MIGRATION_LOCK_FILE;
use crate::timestamp::{MigrationTimestamp, split_prefix};

/// One immediate child of the migrations directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: true }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: false }
    }
}

/// A directory whose name carries a valid `YYYYMMDDHHMMSS_` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationCandidate {
    name: String,
    timestamp: MigrationTimestamp,
}

impl MigrationCandidate {
    /// Returns `None` for files, the lock file, and names that do not start
    /// with 14 ASCII digits followed by `_`.
    pub fn from_entry(entry: &DirectoryEntry) -> Option<Self> {
        if !entry.is_dir || entry.name == MIGRATION_LOCK_FILE {
            return None;
        }
        let (prefix, _label) = split_prefix(&entry.name)?;
        let timestamp = MigrationTimestamp::parse(prefix).ok()?;
        Some(Self { name: entry.name.clone(), timestamp })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> MigrationTimestamp {
        self.timestamp
    }
}

/// The newest migration together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestMigration {
    pub migrations_dir: PathBuf,
    pub name: String,
    pub sql_path: PathBuf,
}
