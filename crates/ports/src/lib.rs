//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: existence checks and directory listing
//! - [`action`]: the interactive prompt and the database CLI invocation
//!
//! Resolver, locator and orchestrator depend only on these traits, so they
//! can be exercised with in-memory stubs.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod action;
pub mod filesystem;
