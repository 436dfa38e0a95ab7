// crates/ports/src/action.rs
use latest_migration_domain::DbShellCommand;
use latest_migration_shared_kernel::Result;

/// Side-effecting collaborator for the operator-facing part of the flow.
pub trait ActionExecutor {
    /// Show `message` and return the operator's raw answer.
    fn prompt(&mut self, message: &str) -> Result<String>;

    /// Run the database CLI to completion and return its stdout.
    ///
    /// # Errors
    /// Returns `InfrastructureError::ExternalCommand` when the program cannot
    /// be spawned or exits unsuccessfully.
    fn run(&mut self, command: &DbShellCommand) -> Result<String>;
}
