// crates/domain/src/action.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use latest_migration_shared_kernel::DomainError;

/// What the operator wants done with the latest migration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MigrationAction {
    /// Print the path so it can be copied by hand.
    #[default]
    Copy,
    /// Pipe the SQL into the database shell.
    Execute,
    Skip,
}

impl MigrationAction {
    pub const PROMPT: &'static str =
        "Choose an action: (c)opy path, (e)xecute with turso, or (s)kip [c/e/s]: ";

    /// Interpret a prompt answer. Unrecognised input means copy.
    pub fn from_choice(input: &str) -> Self {
        input.parse().unwrap_or_default()
    }
}

impl FromStr for MigrationAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "copy" => Ok(Self::Copy),
            "e" | "execute" => Ok(Self::Execute),
            "s" | "skip" => Ok(Self::Skip),
            other => Err(DomainError::UnknownAction { input: other.to_string() }),
        }
    }
}

/// `<program> db shell <db_name>` fed with the migration SQL on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbShellCommand {
    pub program: String,
    pub args: Vec<String>,
    pub input: PathBuf,
}

impl DbShellCommand {
    pub fn new(program: impl Into<String>, db_name: &str, input: &Path) -> Self {
        Self {
            program: program.into(),
            args: vec!["db".to_string(), "shell".to_string(), db_name.to_string()],
            input: input.to_path_buf(),
        }
    }

    /// `<program> <args..>` without the input redirection.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Equivalent shell one-liner using input redirection.
    pub fn suggestion(&self) -> String {
        format!("{} < {}", self.command_line(), self.input.display())
    }
}

impl fmt::Display for DbShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cat {} | {}", self.input.display(), self.command_line())
    }
}
