// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfraResult,
    InfrastructureError, LatestMigrationError, PresentationError, PresentationResult, Result,
};

pub mod error;
pub mod path;
