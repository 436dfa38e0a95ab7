// crates/domain/src/layout.rs
//! Conventional on-disk layout of a Prisma-style migrations tree.

use std::path::{Path, PathBuf};

/// Lock file kept next to the migration folders; never a candidate.
pub const MIGRATION_LOCK_FILE: &str = "migration_lock.toml";

/// SQL file expected inside every migration folder.
pub const MIGRATION_SQL_FILE: &str = "migration.sql";

/// Default `migrationsDir`, relative to the working directory.
pub const DEFAULT_MIGRATIONS_DIR: &str = "prisma/migrations";

/// Location used when the tool is installed inside a nested package,
/// e.g. `<project>/bin/migration-util`.
pub const PARENT_PROJECT_MIGRATIONS_DIR: &str = "../../prisma/migrations";

/// Bundled fixture tree, the last resort of the resolver.
pub const MOCK_MIGRATIONS_DIR: &str = "test/fixtures/migrations";

pub fn standard_migrations_path(cwd: &Path) -> PathBuf {
    cwd.join(DEFAULT_MIGRATIONS_DIR)
}

pub fn parent_project_migrations_path(cwd: &Path) -> PathBuf {
    cwd.join(PARENT_PROJECT_MIGRATIONS_DIR)
}

pub fn mock_migrations_path(cwd: &Path) -> PathBuf {
    cwd.join(MOCK_MIGRATIONS_DIR)
}

/// `<migrations_dir>/<name>/migration.sql`
pub fn migration_sql_path(migrations_dir: &Path, name: &str) -> PathBuf {
    migrations_dir.join(name).join(MIGRATION_SQL_FILE)
}
