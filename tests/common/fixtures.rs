// tests/common/fixtures.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Temporary project directory with a Prisma-style layout.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `<root>/<rel>/<name>/migration.sql`
    pub fn migration(self, rel: &str, name: &str) -> Self {
        let dir = self.path().join(rel).join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("migration.sql"), format!("-- {name}\nSELECT 1;\n")).unwrap();
        self
    }

    /// Migration folder without its SQL file.
    pub fn empty_migration(self, rel: &str, name: &str) -> Self {
        fs::create_dir_all(self.path().join(rel).join(name)).unwrap();
        self
    }

    pub fn lock_file(self, rel: &str) -> Self {
        let dir = self.path().join(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("migration_lock.toml"), "provider = \"sqlite\"\n").unwrap();
        self
    }

    pub fn file(self, rel: &str, contents: &str) -> Self {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.path().join(rel)
    }
}
