//! Process Command Runner
//!
//! Runs menu commands as child processes with captured stdout and stderr.
//! No shell is involved: `argv[0]` is looked up on `PATH` and the remaining
//! tokens are passed verbatim.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::domain::ports::{CommandRunner, ExecutionResult};
use crate::error::ExecutionError;

/// How often a child with a deadline is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// How long a killed command's output readers get to see end-of-file.
const READER_GRACE: Duration = Duration::from_millis(250);

/// Exit code reported when the platform gives neither a code nor a signal.
const UNKNOWN_EXIT_CODE: i32 = -1;

/// Command runner using `std::process`.
///
/// Without a timeout, a run waits as long as the command takes. With one,
/// a command still running at the deadline is killed and reaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&mut self, argv: &[String]) -> Result<ExecutionResult, ExecutionError> {
        let Some((program, args)) = argv.split_first() else {
            return Err(ExecutionError::EmptyCommand);
        };

        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null());
        debug!(program = %program, args = ?args, timeout = ?self.timeout, "spawning");

        match self.timeout {
            None => {
                let output = command.output().map_err(|source| ExecutionError::Spawn {
                    program: program.clone(),
                    source,
                })?;
                Ok(ExecutionResult::from_output(
                    exit_code(output.status),
                    &output.stdout,
                    &output.stderr,
                ))
            }
            Some(limit) => run_with_deadline(command, program, limit),
        }
    }
}

fn run_with_deadline(
    mut command: Command,
    program: &str,
    limit: Duration,
) -> Result<ExecutionResult, ExecutionError> {
    let mut child = command
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExecutionError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // Pipes are drained while waiting so a chatty child never blocks on a full buffer.
    let stdout_reader = drain(child.stdout.take());
    let stderr_reader = drain(child.stderr.take());

    // A limit too large to represent is no limit.
    let deadline = Instant::now().checked_add(limit);
    let status = match wait_until(&mut child, deadline) {
        Ok(Some(status)) => status,
        Ok(None) => {
            warn!(program = %program, after_secs = limit.as_secs(), "command timed out, killing");
            // The child may have exited between the last poll and the kill.
            let _ = child.kill();
            let _ = child.wait();
            release_readers(program, [stdout_reader, stderr_reader]);
            return Err(ExecutionError::TimedOut {
                program: program.to_string(),
                after: limit,
            });
        }
        Err(source) => {
            let _ = child.kill();
            let _ = child.wait();
            release_readers(program, [stdout_reader, stderr_reader]);
            return Err(ExecutionError::Collect {
                program: program.to_string(),
                source,
            });
        }
    };

    let collect = |reader: JoinHandle<std::io::Result<Vec<u8>>>| {
        reader
            .join()
            .unwrap_or_else(|_| Ok(Vec::new()))
            .map_err(|source| ExecutionError::Collect {
                program: program.to_string(),
                source,
            })
    };
    let stdout = collect(stdout_reader)?;
    let stderr = collect(stderr_reader)?;

    Ok(ExecutionResult::from_output(
        exit_code(status),
        &stdout,
        &stderr,
    ))
}

/// Poll `child` until it exits or `deadline` passes (`Ok(None)`).
fn wait_until(child: &mut Child, deadline: Option<Instant>) -> std::io::Result<Option<ExitStatus>> {
    let Some(deadline) = deadline else {
        return child.wait().map(Some);
    };
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Join the readers of a killed child, waiting at most [`READER_GRACE`].
///
/// A reader still blocked after that is held open by a descendant of the
/// child; it ends, and frees its pipe, when that process exits.
fn release_readers(program: &str, readers: [JoinHandle<std::io::Result<Vec<u8>>>; 2]) {
    let deadline = Instant::now() + READER_GRACE;
    while readers.iter().any(|r| !r.is_finished()) && Instant::now() < deadline {
        thread::sleep(POLL_INTERVAL);
    }
    for reader in readers {
        if reader.is_finished() {
            let _ = reader.join();
        } else {
            warn!(program = %program, "output pipe still held by a descendant process");
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<std::io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buffer)?;
        }
        Ok(buffer)
    })
}

/// Exit code of a finished process; a terminating signal `n` maps to `-n`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    UNKNOWN_EXIT_CODE
}
