use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - a report was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (subprocess failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for environment analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum PyprovError {
    #[error("Command failed: {command}\nDetails: {details}\n\n💡 Hint: Verify that the command is installed and on PATH")]
    CommandFailed { command: String, details: String },

    #[error("Command timed out after {timeout_secs}s: {command}\n\n💡 Hint: The package manager may be stuck on a lock; re-run once it is idle")]
    CommandTimeout { command: String, timeout_secs: u64 },

    #[error("Unexpected output from: {command}\nDetails: {details}\n\n💡 Hint: The installed version may use a different output format")]
    MalformedOutput { command: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for user-supplied values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_command_failed_display() {
        let error = PyprovError::CommandFailed {
            command: "python3 -m pip list".to_string(),
            details: "No module named pip".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Command failed"));
        assert!(display.contains("python3 -m pip list"));
        assert!(display.contains("No module named pip"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_command_timeout_display() {
        let error = PyprovError::CommandTimeout {
            command: "conda --version".to_string(),
            timeout_secs: 30,
        };
        let display = format!("{}", error);
        assert!(display.contains("timed out after 30s"));
        assert!(display.contains("conda --version"));
    }

    #[test]
    fn test_malformed_output_display() {
        let error = PyprovError::MalformedOutput {
            command: "pip list --format=json".to_string(),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unexpected output"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = PyprovError::FileWriteError {
            path: PathBuf::from("/test/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("Permission denied"));
    }
}
