use super::{PackageName, PackageRecord};
use serde::Serialize;
use std::collections::BTreeSet;

/// Outcome of classifying one installed package.
///
/// Computed fresh per invocation and not persisted. `dependents` holds
/// every installed package that declares a requirement on this one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub package: PackageRecord,
    pub is_primary: bool,
    pub dependents: BTreeSet<PackageName>,
}

impl ClassificationResult {
    pub fn new(
        package: PackageRecord,
        is_primary: bool,
        dependents: BTreeSet<PackageName>,
    ) -> Self {
        Self {
            package,
            is_primary,
            dependents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primary_detection::domain::PackageOrigin;

    #[test]
    fn test_classification_result_serializes() {
        let record = PackageRecord::new(
            PackageName::normalized("numpy").unwrap(),
            "1.24.0".to_string(),
            PackageOrigin::Pip,
            false,
        );
        let mut dependents = BTreeSet::new();
        dependents.insert(PackageName::normalized("pandas").unwrap());

        let result = ClassificationResult::new(record, true, dependents);
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"is_primary\":true"));
        assert!(json.contains("\"numpy\""));
        assert!(json.contains("\"pandas\""));
    }
}
