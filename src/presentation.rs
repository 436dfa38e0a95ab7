// src/presentation.rs
use std::io::{self, Write};

use latest_migration_usecase::MigrationOutcome;

pub const NO_MIGRATIONS_MESSAGE: &str =
    "No valid migration folders found. Ensure migration folders follow the format YYYYMMDDHHMMSS_name.";

/// Human-readable report of an outcome.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &MigrationOutcome) -> io::Result<()> {
    match outcome {
        MigrationOutcome::NoMigrations { .. } => writeln!(out, "{NO_MIGRATIONS_MESSAGE}"),
        MigrationOutcome::Copied { migration, suggested_command } => {
            writeln!(out, "✅ Migration path: {}", migration.sql_path.display())?;
            if let Some(cmd) = suggested_command {
                writeln!(out, "Suggested command: {cmd}")?;
            }
            writeln!(out, "Copy the path above manually.")
        }
        MigrationOutcome::Executed { output, .. } => {
            writeln!(out, "Migration applied successfully!")?;
            writeln!(out, "{}", output.trim_end())
        }
        MigrationOutcome::Skipped { .. } => writeln!(out, "Skipping migration handling."),
    }
}

pub fn print_outcome(outcome: &MigrationOutcome) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_outcome(&mut lock, outcome)?;
    lock.flush()
}
