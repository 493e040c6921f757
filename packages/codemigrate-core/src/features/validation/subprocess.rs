//! Subprocess-backed checks
//!
//! The linter shell-out and the execution smoke test both run against a
//! transient scratch file owned by the calling check and removed on every
//! exit path. Each subprocess runs under a fixed timeout and is killed on
//! expiry; a timeout becomes a diagnostic, never a crash.

use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config::MigrationConfig;
use crate::shared::models::CheckResult;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum SubprocessOutcome {
    Completed {
        success: bool,
        stdout: String,
        stderr: String,
    },
    TimedOut,
    /// The binary could not be spawned (typically: not installed).
    Unavailable(String),
}

/// Run a command to completion or until the timeout expires, whichever
/// comes first. The child is killed and reaped on expiry.
pub fn run_with_timeout(command: &mut Command, timeout: Duration) -> SubprocessOutcome {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(err) => return SubprocessOutcome::Unavailable(err.to_string()),
    };

    let started = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                let mut stdout = String::new();
                let mut stderr = String::new();
                if let Some(mut pipe) = child.stdout.take() {
                    let _ = pipe.read_to_string(&mut stdout);
                }
                if let Some(mut pipe) = child.stderr.take() {
                    let _ = pipe.read_to_string(&mut stderr);
                }
                return SubprocessOutcome::Completed {
                    success: status.success(),
                    stdout,
                    stderr,
                };
            }
            Ok(None) => {
                if started.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return SubprocessOutcome::TimedOut;
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(err) => {
                let _ = child.kill();
                let _ = child.wait();
                return SubprocessOutcome::Unavailable(err.to_string());
            }
        }
    }
}

/// Write code to a scratch file; the `NamedTempFile` guard deletes it on
/// drop, covering success, diagnostic failure and panic alike.
fn scratch_file(code: &str) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".py").tempfile()?;
    file.write_all(code.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Optional external linter pass. The linter's absence and a timeout are
/// soft warnings, not failures.
pub fn run_static_analysis(python_code: &str, config: &MigrationConfig) -> CheckResult {
    let file = match scratch_file(python_code) {
        Ok(file) => file,
        Err(err) => {
            return CheckResult::from_diagnostics(vec![format!(
                "static analysis skipped: could not create scratch file: {}",
                err
            )]);
        }
    };

    let mut command = Command::new(&config.linter);
    command.arg(file.path()).arg("--max-line-length=100");

    match run_with_timeout(&mut command, Duration::from_millis(config.lint_timeout_ms)) {
        SubprocessOutcome::Completed { success: true, .. } => CheckResult::pass(),
        SubprocessOutcome::Completed { stdout, .. } => {
            CheckResult::from_diagnostics(vec![format!("{} findings:\n{}", config.linter, stdout)])
        }
        SubprocessOutcome::TimedOut => CheckResult::from_diagnostics(vec![format!(
            "static analysis timed out after {}ms",
            config.lint_timeout_ms
        )]),
        SubprocessOutcome::Unavailable(reason) => {
            debug!(linter = %config.linter, %reason, "linter unavailable");
            CheckResult::from_diagnostics(vec![format!(
                "{} not available, skipping static analysis",
                config.linter
            )])
        }
    }
}

/// Outcome of the execution smoke test, with severity attached: a timeout or
/// a runtime error is a hard failure, a missing interpreter only a warning.
pub struct ExecutionCheck {
    pub result: CheckResult,
    pub hard_failure: bool,
}

/// Optional execution smoke test: run the module in an isolated subprocess.
/// Non-zero exit or stderr output is an error; a timeout is a distinct hard
/// failure.
pub fn run_execution_check(python_code: &str, config: &MigrationConfig) -> ExecutionCheck {
    let file = match scratch_file(python_code) {
        Ok(file) => file,
        Err(err) => {
            return ExecutionCheck {
                result: CheckResult::from_diagnostics(vec![format!(
                    "execution check skipped: could not create scratch file: {}",
                    err
                )]),
                hard_failure: false,
            };
        }
    };

    let mut command = Command::new(&config.python_executable);
    command.arg(file.path());

    match run_with_timeout(
        &mut command,
        Duration::from_millis(config.execution_timeout_ms),
    ) {
        SubprocessOutcome::Completed {
            success: true,
            stderr,
            ..
        } if stderr.is_empty() => ExecutionCheck {
            result: CheckResult::pass(),
            hard_failure: false,
        },
        SubprocessOutcome::Completed { stderr, .. } => {
            warn!("execution smoke test failed");
            ExecutionCheck {
                result: CheckResult::from_diagnostics(vec![format!(
                    "execution failed: {}",
                    stderr.trim()
                )]),
                hard_failure: true,
            }
        }
        SubprocessOutcome::TimedOut => ExecutionCheck {
            result: CheckResult::from_diagnostics(vec![format!(
                "execution timed out after {}ms",
                config.execution_timeout_ms
            )]),
            hard_failure: true,
        },
        SubprocessOutcome::Unavailable(reason) => {
            debug!(interpreter = %config.python_executable, %reason, "interpreter unavailable");
            ExecutionCheck {
                result: CheckResult::from_diagnostics(vec![format!(
                    "{} not available, skipping execution check",
                    config.python_executable
                )]),
                hard_failure: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_unavailable() {
        let mut command = Command::new("definitely-not-a-real-binary-name");
        match run_with_timeout(&mut command, Duration::from_millis(100)) {
            SubprocessOutcome::Unavailable(_) => {}
            _ => panic!("expected Unavailable"),
        }
    }

    #[test]
    fn completed_command_captures_output() {
        let mut command = Command::new("true");
        match run_with_timeout(&mut command, Duration::from_millis(2_000)) {
            SubprocessOutcome::Completed { success, .. } => assert!(success),
            _ => panic!("expected Completed"),
        }
    }

    #[test]
    fn failing_command_reports_failure() {
        let mut command = Command::new("false");
        match run_with_timeout(&mut command, Duration::from_millis(2_000)) {
            SubprocessOutcome::Completed { success, .. } => assert!(!success),
            _ => panic!("expected Completed"),
        }
    }

    #[test]
    fn sleeping_command_times_out() {
        let mut command = Command::new("sleep");
        command.arg("5");
        match run_with_timeout(&mut command, Duration::from_millis(200)) {
            SubprocessOutcome::TimedOut => {}
            _ => panic!("expected TimedOut"),
        }
    }
}
