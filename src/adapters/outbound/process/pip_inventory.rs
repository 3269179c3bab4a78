use super::capture_with_timeout;
use crate::ports::outbound::InstalledPackageProvider;
use crate::primary_detection::domain::{PackageName, PackageOrigin, PackageRecord};
use crate::shared::error::PyprovError;
use crate::shared::Result;
use serde::Deserialize;
use std::process::Command;
use std::time::Duration;

/// Default timeout for the pip subprocess. The package manager has no
/// bound of its own, so the adapter imposes one.
pub const DEFAULT_PIP_TIMEOUT_SECS: u64 = 30;

const DEFAULT_PYTHON: &str = "python3";

/// One entry of `pip list --format=json` output.
///
/// Older pip versions emit an `editable` boolean; newer ones mark
/// editables with `editable_project_location` instead. Accept both.
#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
    version: String,
    #[serde(default)]
    editable: bool,
    #[serde(default)]
    editable_project_location: Option<String>,
}

/// PipListInventory adapter enumerating packages via
/// `python -m pip list --format=json`.
///
/// This is the primary inventory strategy; any failure (missing
/// interpreter, missing pip module, timeout, unparsable output) is an
/// error for the inventory service to fall back on.
pub struct PipListInventory {
    python: String,
    timeout: Duration,
}

impl PipListInventory {
    pub fn new(python: String, timeout: Duration) -> Self {
        Self { python, timeout }
    }
}

impl Default for PipListInventory {
    fn default() -> Self {
        Self::new(
            DEFAULT_PYTHON.to_string(),
            Duration::from_secs(DEFAULT_PIP_TIMEOUT_SECS),
        )
    }
}

impl InstalledPackageProvider for PipListInventory {
    fn list_installed(&self) -> Result<Vec<PackageRecord>> {
        let label = format!("{} -m pip list --format=json", self.python);
        let mut command = Command::new(&self.python);
        command.args(["-m", "pip", "list", "--format=json"]);

        let output = capture_with_timeout(command, &label, self.timeout)?;
        parse_pip_list_output(&output.stdout, &label)
    }
}

/// Parses pip's JSON listing into normalized package records.
///
/// Entries whose names cannot be normalized are skipped with a warning
/// rather than failing the whole listing.
fn parse_pip_list_output(stdout: &[u8], label: &str) -> Result<Vec<PackageRecord>> {
    let entries: Vec<PipListEntry> =
        serde_json::from_slice(stdout).map_err(|e| PyprovError::MalformedOutput {
            command: label.to_string(),
            details: e.to_string(),
        })?;

    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            let name = match PackageName::normalized(&entry.name) {
                Ok(name) => name,
                Err(e) => {
                    eprintln!("Warning: skipping pip entry with unusable name: {}", e);
                    return None;
                }
            };
            let editable = entry.editable || entry.editable_project_location.is_some();
            Some(PackageRecord::new(
                name,
                entry.version,
                PackageOrigin::Pip,
                editable,
            ))
        })
        .collect())
}
