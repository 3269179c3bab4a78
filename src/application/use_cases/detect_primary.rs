use crate::application::dto::{DetectReport, ReportMetadata};
use crate::ports::outbound::{
    DistributionMetadataSource, InstalledPackageProvider, ProgressReporter,
};
use crate::primary_detection::domain::EnvironmentKind;
use crate::primary_detection::services::{PackageInventory, PrimaryClassifier};
use crate::shared::Result;

/// DetectPrimaryUseCase - Orchestrates primary-package detection
///
/// Wires the package inventory, the graph-backed classifier and a progress
/// reporter. All infrastructure arrives through injected port
/// implementations, keeping the use case testable with mocks.
///
/// # Type Parameters
/// * `P` - Primary InstalledPackageProvider (pip list)
/// * `F` - Fallback InstalledPackageProvider (dist-info reader)
/// * `M` - DistributionMetadataSource feeding the dependency graph
/// * `PR` - ProgressReporter implementation
pub struct DetectPrimaryUseCase<P, F, M, PR> {
    inventory: PackageInventory<P, F>,
    classifier: PrimaryClassifier<M>,
    progress_reporter: PR,
    environment: EnvironmentKind,
}

impl<P, F, M, PR> DetectPrimaryUseCase<P, F, M, PR>
where
    P: InstalledPackageProvider,
    F: InstalledPackageProvider,
    M: DistributionMetadataSource,
    PR: ProgressReporter,
{
    pub fn new(
        inventory: PackageInventory<P, F>,
        classifier: PrimaryClassifier<M>,
        progress_reporter: PR,
        environment: EnvironmentKind,
    ) -> Self {
        Self {
            inventory,
            classifier,
            progress_reporter,
            environment,
        }
    }

    /// Executes detection: enumerate, classify, report.
    ///
    /// Always produces a report; an unreadable environment yields an empty
    /// one rather than an error.
    pub fn execute(&self) -> Result<DetectReport> {
        self.progress_reporter.begin("Analyzing dependencies...");

        let installed = self.inventory.list_installed();
        self.progress_reporter
            .report(&format!("Detected {} installed package(s)", installed.len()));

        let packages = self.classifier.detect_primary_packages(&installed);
        self.progress_reporter.complete(&format!(
            "{} primary package(s) identified",
            packages.len()
        ));

        Ok(DetectReport {
            metadata: ReportMetadata::now(),
            environment: self.environment,
            total_installed: installed.len(),
            packages,
        })
    }
}
