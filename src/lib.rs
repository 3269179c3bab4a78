//! pyprov - Primary-package detection and conda/pip source routing for
//! Python environments
//!
//! This library inspects an installed Python environment and answers two
//! questions: which packages the user deliberately installed (as opposed
//! to transitive dependencies), and whether a given package is better
//! installed from the conda channel or from pip.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layers** (`primary_detection`, `source_routing`): Pure
//!   business logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pyprov::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Probe conda once and build the resolver from the default tables
//! let probe = CondaVersionProbe::default();
//! let resolver = SourceAffinityResolver::with_probe(RoutingTables::default(), &probe);
//!
//! let packages = vec!["numpy>=1.20".to_string(), "flask".to_string()];
//! let analysis = resolver.analyze_sources(&packages);
//!
//! for classification in &analysis.conda_packages {
//!     println!("{} -> conda", classification.original);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod primary_detection;
pub mod shared;
pub mod source_routing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        render_requirements, JsonReportFormatter, TextReportFormatter,
    };
    pub use crate::adapters::outbound::metadata::DistInfoInventory;
    pub use crate::adapters::outbound::process::{
        detect_environment, CondaVersionProbe, PipListInventory,
    };
    pub use crate::application::dto::{AnalyzeReport, AnalyzeRequest, DetectReport, ReportMetadata};
    pub use crate::application::use_cases::{AnalyzeSourcesUseCase, DetectPrimaryUseCase};
    pub use crate::ports::outbound::{
        DistributionMetadata, DistributionMetadataSource, InstalledPackageProvider,
        NativeToolProbe, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::primary_detection::domain::{
        ClassificationResult, DependencyGraph, EnvironmentKind, PackageName, PackageOrigin,
        PackageRecord,
    };
    pub use crate::primary_detection::services::{
        ClassifierConfig, DependencyGraphBuilder, ExclusionSet, PackageInventory,
        PrimaryClassifier,
    };
    pub use crate::shared::Result;
    pub use crate::source_routing::domain::{
        AffinityAnalysis, HybridResolution, RoutingTables, SourceBucket, SourceClassification,
        TargetFormat,
    };
    pub use crate::source_routing::services::SourceAffinityResolver;
}
