// crates/infra/src/prompt.rs
use std::io::{self, BufRead, Write};

use latest_migration_shared_kernel::{InfrastructureError, Result};

/// Line-based prompt over any reader/writer pair; stdin/stdout in production.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

pub type StdinPrompt = LinePrompt<io::StdinLock<'static>, io::Stdout>;

impl StdinPrompt {
    pub fn stdio() -> Self {
        LinePrompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `message` verbatim and read one line. End of input yields an
    /// empty answer.
    ///
    /// # Errors
    /// Returns `InfrastructureError::Prompt` on I/O failure.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        let prompt_err = |source: io::Error| InfrastructureError::Prompt { source };

        self.output.write_all(message.as_bytes()).map_err(prompt_err)?;
        self.output.flush().map_err(prompt_err)?;

        let mut line = String::new();
        self.input.read_line(&mut line).map_err(prompt_err)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
