// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LatestMigrationError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LatestMigrationError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl LatestMigrationError {
    /// Innermost error, skipping any `Context` wrappers.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, LatestMigrationError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid migration timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Unknown action '{input}'")]
    UnknownAction { input: String },

    #[error("Invalid configuration: {}", .issues.join("; "))]
    InvalidConfiguration { issues: Vec<String> },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(
        "No migrations directory found. Please create one or specify a custom path (tried: {})",
        format_paths(.tried)
    )]
    PathResolutionExhausted { tried: Vec<PathBuf> },

    #[error("Migration SQL file not found at: {}", .path.display())]
    MissingSqlFile { path: PathBuf },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read migrations directory '{}': {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' failed: {reason}")]
    ExternalCommand { command: String, reason: String },

    #[error("Failed to read interactive input: {source}")]
    Prompt {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config '{}': {details}", .path.display())]
    ConfigParse {
        format: String,
        path: PathBuf,
        details: String,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LatestMigrationError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LatestMigrationError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LatestMigrationError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
