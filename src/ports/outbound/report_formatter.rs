use crate::application::dto::{AnalyzeReport, DetectReport};
use crate::shared::Result;

/// ReportFormatter port for rendering analysis reports
///
/// Formatters turn the structured report DTOs into a string ready for an
/// OutputPresenter. They must not perform I/O themselves.
pub trait ReportFormatter {
    /// Renders a primary-package detection report
    ///
    /// # Arguments
    /// * `report` - The detection report to render
    fn format_detect(&self, report: &DetectReport) -> Result<String>;

    /// Renders a source-affinity analysis report
    ///
    /// # Arguments
    /// * `report` - The analysis report to render
    fn format_analyze(&self, report: &AnalyzeReport) -> Result<String>;
}
