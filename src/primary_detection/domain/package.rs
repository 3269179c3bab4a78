use crate::shared::Result;
use serde::Serialize;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for a normalized package name.
///
/// Normalization follows the PyPI convention: case-folded, with runs of
/// `-`, `_` and `.` collapsed into a single `-`. Two spellings of the same
/// distribution ("Flask", "flask") compare equal after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PackageName(String);

impl PackageName {
    /// Normalizes a raw package name and wraps it.
    ///
    /// # Errors
    /// Returns an error if the name is empty after trimming, or exceeds
    /// the length limit.
    pub fn normalized(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if trimmed.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        let mut normalized = String::with_capacity(trimmed.len());
        let mut previous_was_separator = false;
        for ch in trimmed.chars() {
            if matches!(ch, '-' | '_' | '.') {
                if !previous_was_separator {
                    normalized.push('-');
                    previous_was_separator = true;
                }
            } else {
                for lowered in ch.to_lowercase() {
                    normalized.push(lowered);
                }
                previous_was_separator = false;
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which channel a package record was observed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageOrigin {
    /// Listed by pip or read from pip-managed dist-info metadata
    Pip,
    /// Installed through a conda channel
    Conda,
    /// Origin could not be determined
    Unknown,
}

impl std::fmt::Display for PackageOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageOrigin::Pip => write!(f, "pip"),
            PackageOrigin::Conda => write!(f, "conda"),
            PackageOrigin::Unknown => write!(f, "unknown"),
        }
    }
}

/// One installed package as reported by the environment's metadata store.
///
/// Immutable once read for a given inventory snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageRecord {
    pub name: PackageName,
    pub version: String,
    pub origin: PackageOrigin,
    pub editable: bool,
}

impl PackageRecord {
    pub fn new(name: PackageName, version: String, origin: PackageOrigin, editable: bool) -> Self {
        Self {
            name,
            version,
            origin,
            editable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_normalized_lowercases() {
        let name = PackageName::normalized("Flask").unwrap();
        assert_eq!(name.as_str(), "flask");
    }

    #[test]
    fn test_package_name_normalized_collapses_separators() {
        let name = PackageName::normalized("typing_extensions").unwrap();
        assert_eq!(name.as_str(), "typing-extensions");

        let name = PackageName::normalized("ruamel.yaml").unwrap();
        assert_eq!(name.as_str(), "ruamel-yaml");

        let name = PackageName::normalized("a-_.b").unwrap();
        assert_eq!(name.as_str(), "a-b");
    }

    #[test]
    fn test_package_name_normalized_already_canonical() {
        let name = PackageName::normalized("numpy").unwrap();
        assert_eq!(name.as_str(), "numpy");
    }

    #[test]
    fn test_package_name_empty_rejected() {
        assert!(PackageName::normalized("").is_err());
        assert!(PackageName::normalized("   ").is_err());
    }

    #[test]
    fn test_package_name_too_long_rejected() {
        let long = "a".repeat(300);
        assert!(PackageName::normalized(&long).is_err());
    }

    #[test]
    fn test_package_name_equality_after_normalization() {
        let a = PackageName::normalized("Pillow").unwrap();
        let b = PackageName::normalized("pillow").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_package_origin_display() {
        assert_eq!(format!("{}", PackageOrigin::Pip), "pip");
        assert_eq!(format!("{}", PackageOrigin::Conda), "conda");
        assert_eq!(format!("{}", PackageOrigin::Unknown), "unknown");
    }

    #[test]
    fn test_package_record_new() {
        let record = PackageRecord::new(
            PackageName::normalized("requests").unwrap(),
            "2.31.0".to_string(),
            PackageOrigin::Pip,
            false,
        );
        assert_eq!(record.name.as_str(), "requests");
        assert_eq!(record.version, "2.31.0");
        assert!(!record.editable);
    }
}
