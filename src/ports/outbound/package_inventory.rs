use crate::primary_detection::domain::PackageRecord;
use crate::shared::Result;

/// Raw metadata for one installed distribution, as read from the
/// environment's metadata store.
///
/// `name` and `version` are unnormalized, exactly as declared; `requires`
/// holds raw requirement specifier strings (e.g. `"requests>=2.0,<3"`).
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionMetadata {
    pub name: String,
    pub version: String,
    pub requires: Vec<String>,
}

impl DistributionMetadata {
    pub fn new(name: String, version: String, requires: Vec<String>) -> Self {
        Self {
            name,
            version,
            requires,
        }
    }
}

/// InstalledPackageProvider port for enumerating installed packages.
///
/// Implemented by the `pip list` subprocess adapter and by the dist-info
/// metadata reader. A provider either yields the full installed list or an
/// error; the inventory service decides how to fall back.
pub trait InstalledPackageProvider {
    /// Enumerates the installed packages in the active environment.
    ///
    /// # Errors
    /// Returns an error if the underlying enumeration strategy fails
    /// (subprocess failure, unreadable metadata store). An empty
    /// environment is `Ok(vec![])`, not an error.
    fn list_installed(&self) -> Result<Vec<PackageRecord>>;
}

/// DistributionMetadataSource port for reading declared requirements.
///
/// The dependency graph is built from this source, independently of which
/// provider produced the inventory listing.
pub trait DistributionMetadataSource {
    /// Reads every installed distribution together with its declared
    /// requirement strings.
    ///
    /// # Errors
    /// Returns an error if the metadata store cannot be enumerated at all.
    /// Individually malformed distributions are skipped by the caller, not
    /// surfaced here.
    fn distributions(&self) -> Result<Vec<DistributionMetadata>>;
}
