// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod executor;
pub mod filesystem;
pub mod prompt;
pub mod shell;

pub use config::ConfigLoader;
pub use executor::SystemActionExecutor;
pub use filesystem::StdMigrationFs;
