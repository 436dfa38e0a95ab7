//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`resolver`]: ordered fallback chain for the migrations directory
//! - [`locator`]: newest migration folder and its SQL file
//! - [`orchestrator`]: resolve, locate, then copy / execute / skip
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod locator;
pub mod orchestrator;
pub mod resolver;

pub use locator::{LatestMigrationLocator, LocateOutcome};
pub use orchestrator::{HandleLatestMigration, MigrationOutcome, MigrationRequest};
pub use resolver::{FallbackSource, MigrationsPathResolver};
