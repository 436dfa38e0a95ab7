// src/main.rs
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use latest_migration::cli::Args;
use latest_migration::{app, logging, presentation};
use latest_migration_infra::SystemActionExecutor;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(logging::default_level(args.verbose, args.quiet));

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine the working directory")?;
    let mut executor = SystemActionExecutor::stdio();
    let outcome = app::run(args, &cwd, &mut executor)?;
    presentation::print_outcome(&outcome).context("failed to write output")?;
    Ok(())
}
