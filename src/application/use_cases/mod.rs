pub mod analyze_sources;
pub mod detect_primary;

pub use analyze_sources::AnalyzeSourcesUseCase;
pub use detect_primary::DetectPrimaryUseCase;
