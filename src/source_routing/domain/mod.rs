pub mod classification;
pub mod hybrid;
pub mod tables;

pub use classification::{AffinityAnalysis, SourceBucket, SourceClassification};
pub use hybrid::{CondaDependency, CondaEnvironmentSpec, HybridResolution, TargetFormat};
pub use tables::RoutingTables;
