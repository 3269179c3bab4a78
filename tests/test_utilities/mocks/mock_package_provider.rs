use pyprov::prelude::*;

/// Mock InstalledPackageProvider for testing
pub struct MockPackageProvider {
    pub records: Vec<PackageRecord>,
    pub should_fail: bool,
}

impl MockPackageProvider {
    pub fn new(records: Vec<PackageRecord>) -> Self {
        Self {
            records,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            records: Vec::new(),
            should_fail: true,
        }
    }
}

impl InstalledPackageProvider for MockPackageProvider {
    fn list_installed(&self) -> Result<Vec<PackageRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock package enumeration failure");
        }
        Ok(self.records.clone())
    }
}
