use super::capture_with_timeout;
use crate::ports::outbound::NativeToolProbe;
use std::process::Command;
use std::time::Duration;

/// The probe only runs `conda --version`; it should answer quickly.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

const DEFAULT_CONDA: &str = "conda";

/// CondaVersionProbe adapter checking conda availability by invoking its
/// version command.
///
/// Never raises: a missing binary, non-zero exit or timeout all report
/// "unavailable".
pub struct CondaVersionProbe {
    conda: String,
    timeout: Duration,
}

impl CondaVersionProbe {
    pub fn new(conda: String, timeout: Duration) -> Self {
        Self { conda, timeout }
    }
}

impl Default for CondaVersionProbe {
    fn default() -> Self {
        Self::new(
            DEFAULT_CONDA.to_string(),
            Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        )
    }
}

impl NativeToolProbe for CondaVersionProbe {
    fn is_available(&self) -> bool {
        let label = format!("{} --version", self.conda);
        let mut command = Command::new(&self.conda);
        command.arg("--version");
        capture_with_timeout(command, &label, self.timeout).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_reports_unavailable() {
        let probe = CondaVersionProbe::new(
            "definitely-not-conda".to_string(),
            Duration::from_secs(5),
        );
        assert!(!probe.is_available());
    }

    #[test]
    fn test_succeeding_command_reports_available() {
        // `true` ignores its arguments and exits 0, standing in for conda
        let probe = CondaVersionProbe::new("true".to_string(), Duration::from_secs(5));
        assert!(probe.is_available());
    }

    #[test]
    fn test_failing_command_reports_unavailable() {
        let probe = CondaVersionProbe::new("false".to_string(), Duration::from_secs(5));
        assert!(!probe.is_available());
    }
}
