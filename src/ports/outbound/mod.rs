/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (subprocesses, file system, console).
pub mod output_presenter;
pub mod package_inventory;
pub mod progress_reporter;
pub mod report_formatter;
pub mod tool_probe;

pub use output_presenter::OutputPresenter;
pub use package_inventory::{
    DistributionMetadata, DistributionMetadataSource, InstalledPackageProvider,
};
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use tool_probe::NativeToolProbe;
