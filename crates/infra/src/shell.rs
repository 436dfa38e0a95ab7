// crates/infra/src/shell.rs
use std::fs::File;
use std::process::{Command, Stdio};

use latest_migration_domain::DbShellCommand;
use latest_migration_shared_kernel::{InfrastructureError, Result};

/// Runs the database CLI as a child process with the migration SQL as stdin.
///
/// The program is spawned directly, not through a shell, so paths and
/// database names are never re-interpreted. There is no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    /// - `InfrastructureError::FileRead` if the SQL file cannot be opened
    /// - `InfrastructureError::ExternalCommand` if the program cannot be
    ///   spawned or exits unsuccessfully; carries stderr when there is any
    pub fn run(&self, command: &DbShellCommand) -> Result<String> {
        let input = File::open(&command.input).map_err(|source| InfrastructureError::FileRead {
            path: command.input.clone(),
            source,
        })?;

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::from(input))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| InfrastructureError::ExternalCommand {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let reason = if stderr.is_empty() { format!("exited with {}", output.status) } else { stderr };
        Err(InfrastructureError::ExternalCommand { command: command.to_string(), reason }.into())
    }
}
