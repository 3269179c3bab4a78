/// Domain objects for primary-package detection.
///
/// Pure data and parsing; no I/O. Services in the sibling module hold the
/// decision logic.
pub mod classification;
pub mod dependency_graph;
pub mod environment;
pub mod package;
pub mod requirement;

pub use classification::ClassificationResult;
pub use dependency_graph::DependencyGraph;
pub use environment::EnvironmentKind;
pub use package::{PackageName, PackageOrigin, PackageRecord};
pub use requirement::{parse_requirement, strip_version_constraint};
