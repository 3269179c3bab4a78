use crate::application::dto::{AnalyzeReport, DetectReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter renders reports as pretty-printed JSON.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format_detect(&self, report: &DetectReport) -> Result<String> {
        let mut output = serde_json::to_string_pretty(report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize detection report: {}", e))?;
        output.push('\n');
        Ok(output)
    }

    fn format_analyze(&self, report: &AnalyzeReport) -> Result<String> {
        let mut output = serde_json::to_string_pretty(report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize analysis report: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}
