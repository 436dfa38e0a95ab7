// src/app.rs
use std::path::Path;

use latest_migration_infra::{ConfigLoader, StdMigrationFs};
use latest_migration_ports::action::ActionExecutor;
use latest_migration_shared_kernel::path::absolutize_against;
use latest_migration_shared_kernel::{ErrorContext, Result};
use latest_migration_usecase::{HandleLatestMigration, MigrationOutcome};

use crate::cli::Args;

/// Load configuration relative to `cwd` and handle the latest migration.
///
/// Relative `--config` and `--migrations-dir` values are both resolved
/// against `cwd`, never the process working directory. Fatal conditions come
/// back as `Err` rather than exiting, so callers other than `main` can
/// inspect them.
///
/// # Errors
/// Invalid arguments or configuration, and every fatal error of
/// [`HandleLatestMigration::run`].
pub fn run(args: &Args, cwd: &Path, executor: &mut dyn ActionExecutor) -> Result<MigrationOutcome> {
    args.validate()?;

    let mut loader = ConfigLoader::in_dir(cwd);
    if let Some(path) = &args.config {
        loader = loader.with_config_file(absolutize_against(path, cwd));
    }
    let config = loader.load().context("loading configuration")?;

    let fs = StdMigrationFs::new();
    let mut request = args.to_request();
    request.custom_path = request.custom_path.map(|dir| absolutize_against(&dir, cwd));
    HandleLatestMigration::new(&fs, executor, &config, cwd).run(&request)
}
