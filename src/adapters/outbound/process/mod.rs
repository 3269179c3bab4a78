/// Subprocess-backed adapters: the pip inventory, the conda probe and
/// environment-kind detection.
pub mod conda_probe;
pub mod environment;
pub mod pip_inventory;

pub use conda_probe::CondaVersionProbe;
pub use environment::detect_environment;
pub use pip_inventory::PipListInventory;

use crate::shared::error::PyprovError;
use crate::shared::Result;
use std::process::{Command, Output, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

/// Runs a command with nullified stdin and captured output, killing it if
/// it outlives `timeout`.
///
/// # Errors
/// Spawn failure, non-zero exit and timeout all surface as errors; callers
/// in the inventory path treat any of them as "strategy failed".
pub(crate) fn capture_with_timeout(
    mut command: Command,
    label: &str,
    timeout: Duration,
) -> Result<Output> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| PyprovError::CommandFailed {
            command: label.to_string(),
            details: e.to_string(),
        })?;

    match child.wait_timeout(timeout)? {
        Some(status) => {
            let output = child.wait_with_output()?;
            if status.success() {
                Ok(output)
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(PyprovError::CommandFailed {
                    command: label.to_string(),
                    details: format!(
                        "exit code {}: {}",
                        status.code().unwrap_or(-1),
                        stderr.trim()
                    ),
                }
                .into())
            }
        }
        None => {
            let _ = child.kill();
            let _ = child.wait();
            Err(PyprovError::CommandTimeout {
                command: label.to_string(),
                timeout_secs: timeout.as_secs(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_with_timeout_success() {
        let mut command = Command::new("echo");
        command.arg("hello");
        let output = capture_with_timeout(command, "echo hello", Duration::from_secs(5)).unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }

    #[test]
    fn test_capture_with_timeout_spawn_failure() {
        let command = Command::new("definitely-not-a-real-binary-name");
        let result = capture_with_timeout(command, "missing", Duration::from_secs(5));
        assert!(result.is_err());
    }

    #[test]
    fn test_capture_with_timeout_nonzero_exit() {
        let command = Command::new("false");
        let result = capture_with_timeout(command, "false", Duration::from_secs(5));
        assert!(result.is_err());
        let display = format!("{}", result.unwrap_err());
        assert!(display.contains("exit code"));
    }

    #[test]
    fn test_capture_with_timeout_kills_slow_command() {
        let mut command = Command::new("sleep");
        command.arg("30");
        let result = capture_with_timeout(command, "sleep 30", Duration::from_millis(100));
        assert!(result.is_err());
        let display = format!("{}", result.unwrap_err());
        assert!(display.contains("timed out"));
    }
}
