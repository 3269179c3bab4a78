use crate::application::dto::{AnalyzeReport, AnalyzeRequest, ReportMetadata};
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use crate::source_routing::services::SourceAffinityResolver;

/// AnalyzeSourcesUseCase - Orchestrates conda/pip source-affinity analysis
///
/// The resolver was constructed with its routing tables and a one-time
/// conda availability probe; this use case only sequences classification
/// and optional hybrid resolution.
pub struct AnalyzeSourcesUseCase<PR> {
    resolver: SourceAffinityResolver,
    progress_reporter: PR,
}

impl<PR> AnalyzeSourcesUseCase<PR>
where
    PR: ProgressReporter,
{
    pub fn new(resolver: SourceAffinityResolver, progress_reporter: PR) -> Self {
        Self {
            resolver,
            progress_reporter,
        }
    }

    /// Executes the analysis described by `request`.
    pub fn execute(&self, request: AnalyzeRequest) -> Result<AnalyzeReport> {
        self.progress_reporter.begin(&format!(
            "Classifying {} package(s)...",
            request.packages.len()
        ));

        let analysis = self.resolver.analyze_sources(&request.packages);

        let resolution = match request.resolve {
            Some(target_format) => Some(
                self.resolver
                    .resolve_hybrid_environment(&request.packages, target_format)?,
            ),
            None => None,
        };

        self.progress_reporter.complete(&format!(
            "{} conda-routed, {} pip-routed",
            analysis.conda_packages.len(),
            analysis.pip_packages.len()
        ));

        Ok(AnalyzeReport {
            metadata: ReportMetadata::now(),
            conda_available: self.resolver.conda_available(),
            analysis,
            resolution,
        })
    }
}
