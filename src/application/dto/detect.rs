use super::ReportMetadata;
use crate::primary_detection::domain::{ClassificationResult, EnvironmentKind};
use serde::Serialize;

/// DetectReport - Result of a primary-package detection run
///
/// `packages` holds only the primary subset; `total_installed` records how
/// many packages were evaluated, so consumers can show coverage.
#[derive(Debug, Clone, Serialize)]
pub struct DetectReport {
    pub metadata: ReportMetadata,
    pub environment: EnvironmentKind,
    pub total_installed: usize,
    pub packages: Vec<ClassificationResult>,
}

impl DetectReport {
    pub fn primary_count(&self) -> usize {
        self.packages.len()
    }
}
