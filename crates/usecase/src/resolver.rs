// crates/usecase/src/resolver.rs
use std::fmt;
use std::path::{Path, PathBuf};

use latest_migration_domain::layout::{
    mock_migrations_path, parent_project_migrations_path, standard_migrations_path,
};
use latest_migration_ports::filesystem::MigrationFs;
use latest_migration_shared_kernel::path::{absolutize_against, normalize_lexically};
use latest_migration_shared_kernel::{ApplicationError, Result};
use tracing::{debug, warn};

/// Where a fallback candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackSource {
    Custom,
    Configured,
    Standard,
    ParentProject,
    Mock,
}

impl fmt::Display for FallbackSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Custom => "custom",
            Self::Configured => "configured",
            Self::Standard => "standard",
            Self::ParentProject => "parent project",
            Self::Mock => "mock",
        })
    }
}

/// Picks the migrations directory from a fixed, ordered fallback chain:
/// explicit path, configured directory, `prisma/migrations`, the parent
/// project's `prisma/migrations`, then the bundled fixtures.
pub struct MigrationsPathResolver<'a> {
    fs: &'a dyn MigrationFs,
    cwd: PathBuf,
    configured_dir: String,
}

impl<'a> MigrationsPathResolver<'a> {
    pub fn new(fs: &'a dyn MigrationFs, cwd: impl Into<PathBuf>, configured_dir: impl Into<String>) -> Self {
        Self { fs, cwd: cwd.into(), configured_dir: configured_dir.into() }
    }

    /// The ordered candidates. The standard path is omitted when it equals
    /// the configured one.
    pub fn candidates(&self, custom_path: Option<&Path>) -> Vec<(FallbackSource, PathBuf)> {
        let mut out = Vec::with_capacity(5);
        if let Some(custom) = custom_path {
            out.push((FallbackSource::Custom, custom.to_path_buf()));
        }

        let configured = absolutize_against(Path::new(&self.configured_dir), &self.cwd);
        let standard = normalize_lexically(&standard_migrations_path(&self.cwd));
        let skip_standard = configured == standard;
        out.push((FallbackSource::Configured, configured));
        if !skip_standard {
            out.push((FallbackSource::Standard, standard));
        }

        out.push((
            FallbackSource::ParentProject,
            normalize_lexically(&parent_project_migrations_path(&self.cwd)),
        ));
        out.push((FallbackSource::Mock, mock_migrations_path(&self.cwd)));
        out
    }

    /// First existing candidate. Stops checking at the first hit.
    ///
    /// # Errors
    /// Returns `ApplicationError::PathResolutionExhausted` when none exists.
    pub fn resolve(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let candidates = self.candidates(custom_path);
        for (source, path) in &candidates {
            if self.fs.exists(path) {
                debug!(%source, path = %path.display(), "resolved migrations directory");
                return Ok(path.clone());
            }
            if *source == FallbackSource::Custom {
                warn!(
                    "Custom migrations path {} not found, falling back to defaults",
                    path.display()
                );
            }
        }
        Err(ApplicationError::PathResolutionExhausted {
            tried: candidates.into_iter().map(|(_, path)| path).collect(),
        }
        .into())
    }
}
