use crate::ports::outbound::InstalledPackageProvider;
use crate::primary_detection::domain::PackageRecord;

/// PackageInventory service combining a primary and a fallback
/// enumeration strategy.
///
/// The primary provider (normally `pip list --format=json`) is tried
/// first; on failure or an empty result the fallback (normally the
/// dist-info metadata reader) is consulted. If both fail the inventory is
/// empty — enumeration never raises to the caller.
pub struct PackageInventory<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> PackageInventory<P, F>
where
    P: InstalledPackageProvider,
    F: InstalledPackageProvider,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Enumerates installed packages, falling back between strategies.
    ///
    /// # Returns
    /// The installed packages, possibly empty. Strategy failures are
    /// reported to stderr and swallowed.
    pub fn list_installed(&self) -> Vec<PackageRecord> {
        match self.primary.list_installed() {
            Ok(records) if !records.is_empty() => return records,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Warning: primary package enumeration failed: {}", e);
            }
        }

        match self.fallback.list_installed() {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Warning: fallback package enumeration failed: {}", e);
                Vec::new()
            }
        }
    }
}
