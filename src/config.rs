//! Configuration file support for pyprov.
//!
//! Provides YAML-based configuration through `pyprov.config.yml` files,
//! including data structures, file loading, and validation. Everything in
//! the file is optional; the static defaults apply where a field is
//! absent.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "pyprov.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Python executable used for the pip inventory subprocess
    pub python: Option<String>,
    /// Timeout in seconds for the pip inventory subprocess
    pub timeout_secs: Option<u64>,
    /// Extra names for the common-dependency exclusion set
    pub extra_common_dependencies: Option<Vec<String>>,
    /// Extra conda-preferred names for source routing
    pub prefer_conda: Option<Vec<String>>,
    /// Extra pip-preferred names for source routing
    pub prefer_pip: Option<Vec<String>>,
    /// Extra pip -> conda name remappings
    pub conda_remap: Option<HashMap<String, String>>,
    /// Override for the primary-package dependent threshold
    pub max_dependents_for_primary: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than zero.\n\n\
             💡 Hint: Omit the field to use the default timeout."
        );
    }

    for (field, names) in [
        ("extra_common_dependencies", &config.extra_common_dependencies),
        ("prefer_conda", &config.prefer_conda),
        ("prefer_pip", &config.prefer_pip),
    ] {
        if let Some(names) = names {
            for (i, name) in names.iter().enumerate() {
                if name.trim().is_empty() {
                    bail!(
                        "Invalid config: {}[{}] must not be empty.\n\n\
                         💡 Hint: Each entry must be a non-empty package name.",
                        field,
                        i
                    );
                }
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "python: python3.12\n\
             timeout_secs: 60\n\
             extra_common_dependencies:\n  - my-internal-lib\n\
             prefer_conda:\n  - polars\n\
             prefer_pip:\n  - httpx\n\
             conda_remap:\n  polars: polars-lts-cpu\n\
             max_dependents_for_primary: 3\n",
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.python.as_deref(), Some("python3.12"));
        assert_eq!(config.timeout_secs, Some(60));
        assert_eq!(
            config.extra_common_dependencies.as_deref(),
            Some(&["my-internal-lib".to_string()][..])
        );
        assert_eq!(config.max_dependents_for_primary, Some(3));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&dir.path().join("nope.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_returns_none_without_file() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_finds_config() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "python: python3\n");
        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.python.as_deref(), Some("python3"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "timeout_secs: 0\n");
        let result = load_config_from_path(&path);
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("timeout_secs"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "prefer_conda:\n  - \"\"\n");
        assert!(load_config_from_path(&path).is_err());
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "python: python3\nsome_future_field: 1\n");
        let config = load_config_from_path(&path).unwrap();
        assert!(config.unknown_fields.contains_key("some_future_field"));
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "python: [unclosed\n");
        assert!(load_config_from_path(&path).is_err());
    }
}
