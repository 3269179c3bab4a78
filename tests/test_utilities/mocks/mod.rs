mod mock_metadata_source;
mod mock_package_provider;
mod mock_progress_reporter;
mod mock_tool_probe;

pub use mock_metadata_source::MockMetadataSource;
pub use mock_package_provider::MockPackageProvider;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_tool_probe::MockToolProbe;
