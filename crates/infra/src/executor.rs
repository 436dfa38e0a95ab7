// crates/infra/src/executor.rs
use std::io::{BufRead, Write};

use latest_migration_domain::DbShellCommand;
use latest_migration_ports::action::ActionExecutor;
use latest_migration_shared_kernel::Result;

use crate::prompt::{LinePrompt, StdinPrompt};
use crate::shell::ProcessCommandRunner;

/// `ActionExecutor` combining a line prompt with the process runner.
pub struct SystemActionExecutor<R, W> {
    prompt: LinePrompt<R, W>,
    runner: ProcessCommandRunner,
}

impl SystemActionExecutor<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(StdinPrompt::stdio())
    }
}

impl<R: BufRead, W: Write> SystemActionExecutor<R, W> {
    pub fn new(prompt: LinePrompt<R, W>) -> Self {
        Self { prompt, runner: ProcessCommandRunner::new() }
    }
}

impl<R: BufRead, W: Write> ActionExecutor for SystemActionExecutor<R, W> {
    fn prompt(&mut self, message: &str) -> Result<String> {
        self.prompt.ask(message)
    }

    fn run(&mut self, command: &DbShellCommand) -> Result<String> {
        self.runner.run(command)
    }
}
