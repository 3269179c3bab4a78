use super::ReportMetadata;
use crate::source_routing::domain::{AffinityAnalysis, HybridResolution, TargetFormat};
use serde::Serialize;

/// AnalyzeRequest - Input for a source-affinity analysis run
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Package names, possibly carrying version constraints
    pub packages: Vec<String>,
    /// When set, also resolve a hybrid environment for this target format
    pub resolve: Option<TargetFormat>,
}

impl AnalyzeRequest {
    pub fn new(packages: Vec<String>, resolve: Option<TargetFormat>) -> Self {
        Self { packages, resolve }
    }
}

/// AnalyzeReport - Result of a source-affinity analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeReport {
    pub metadata: ReportMetadata,
    pub conda_available: bool,
    pub analysis: AffinityAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<HybridResolution>,
}
