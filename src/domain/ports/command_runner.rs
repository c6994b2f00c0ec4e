//! Command Runner Port
//!
//! Runs an argv to completion and hands back its exit code and output.
//! The process runner in the infrastructure layer is the production
//! implementation.

use crate::error::ExecutionError;

/// Placeholder used when a command printed nothing at all.
pub const NO_OUTPUT: &str = "(no output)";

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    /// Trimmed stdout
    pub stdout_text: String,
    /// Trimmed stdout and stderr, non-empty ones joined by a newline
    pub combined_output: String,
}

impl ExecutionResult {
    /// Build a result from raw process output, decoding lossily as UTF-8.
    pub fn from_output(exit_code: i32, stdout: &[u8], stderr: &[u8]) -> Self {
        let stdout_text = String::from_utf8_lossy(stdout).trim().to_string();
        let stderr_text = String::from_utf8_lossy(stderr).trim().to_string();

        let combined_output = match (stdout_text.is_empty(), stderr_text.is_empty()) {
            (true, true) => NO_OUTPUT.to_string(),
            (false, true) => stdout_text.clone(),
            (true, false) => stderr_text,
            (false, false) => format!("{}\n{}", stdout_text, stderr_text),
        };

        Self {
            exit_code,
            stdout_text,
            combined_output,
        }
    }
}

/// Trait for running external commands.
pub trait CommandRunner {
    /// Run `argv[0]` with the remaining arguments and wait for it to exit.
    fn run(&mut self, argv: &[String]) -> Result<ExecutionResult, ExecutionError>;
}

/// Runner with canned results, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: std::collections::VecDeque<Result<ExecutionResult, String>>,
    /// Every argv passed to `run`, in order
    pub calls: Vec<Vec<String>>,
}

#[cfg(test)]
impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful run.
    pub fn then_ok(mut self, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.responses.push_back(Ok(ExecutionResult::from_output(
            exit_code,
            stdout.as_bytes(),
            stderr.as_bytes(),
        )));
        self
    }

    /// Queue a spawn failure.
    pub fn then_spawn_error(mut self, message: &str) -> Self {
        self.responses.push_back(Err(message.to_string()));
        self
    }
}

#[cfg(test)]
impl CommandRunner for MockRunner {
    fn run(&mut self, argv: &[String]) -> Result<ExecutionResult, ExecutionError> {
        self.calls.push(argv.to_vec());
        match self.responses.pop_front() {
            Some(Ok(result)) => Ok(result),
            Some(Err(message)) => Err(ExecutionError::Spawn {
                program: argv.first().cloned().unwrap_or_default(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, message),
            }),
            None => panic!("unexpected command: {:?}", argv),
        }
    }
}
