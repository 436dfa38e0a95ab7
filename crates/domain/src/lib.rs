#![allow(clippy::multiple_crate_versions)]

pub mod action;
pub mod config;
pub mod layout;
pub mod migration;
pub mod selection;
pub mod timestamp;

pub use action::{DbShellCommand, MigrationAction};
pub use config::AppConfig;
pub use migration::{DirectoryEntry, LatestMigration, MigrationCandidate};
pub use timestamp::MigrationTimestamp;
