use crate::application::dto::{AnalyzeReport, DetectReport};
use crate::ports::outbound::ReportFormatter;
use crate::primary_detection::domain::ClassificationResult;
use crate::shared::Result;
use crate::source_routing::domain::{HybridResolution, SourceClassification};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// At most this many dependents are listed per package; the rest collapse
/// into a `(+N more)` suffix.
const MAX_DEPENDENTS_SHOWN: usize = 3;

/// TextReportFormatter renders reports for human consumption on a
/// terminal.
pub struct TextReportFormatter {
    show_dependents: bool,
}

impl TextReportFormatter {
    pub fn new(show_dependents: bool) -> Self {
        Self { show_dependents }
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format_detect(&self, report: &DetectReport) -> Result<String> {
        let mut out = String::new();

        if report.packages.is_empty() {
            writeln!(out, "{}", "No primary packages detected.".yellow())?;
            writeln!(out)?;
            writeln!(
                out,
                "Environment: {} · {} installed",
                report.environment,
                report.total_installed
            )?;
            return Ok(out);
        }

        writeln!(
            out,
            "{}",
            format!("Primary Dependencies ({} found)", report.packages.len()).bold()
        )?;
        writeln!(out)?;

        let name_width = report
            .packages
            .iter()
            .map(|r| r.package.name.as_str().len())
            .max()
            .unwrap_or(0)
            .max("PACKAGE".len());
        let version_width = report
            .packages
            .iter()
            .map(|r| r.package.version.len())
            .max()
            .unwrap_or(0)
            .max("VERSION".len());

        write!(
            out,
            "{:<name_width$}  {:<version_width$}  {:<8}",
            "PACKAGE", "VERSION", "ORIGIN"
        )?;
        if self.show_dependents {
            write!(out, "  DEPENDENTS")?;
        }
        writeln!(out)?;

        for result in &report.packages {
            // pad before coloring so escape codes don't skew the columns
            let name = format!("{:<name_width$}", result.package.name.as_str());
            let version = format!("{:<version_width$}", result.package.version);
            let origin = result.package.origin.to_string();
            write!(out, "{}  {}  {:<8}", name.cyan(), version.green(), origin)?;
            if self.show_dependents {
                write!(out, "  {}", render_dependents(result))?;
            }
            writeln!(out)?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Environment: {} · {} installed, {} primary",
            report.environment,
            report.total_installed,
            report.primary_count()
        )?;
        Ok(out)
    }

    fn format_analyze(&self, report: &AnalyzeReport) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "{}", "Package Source Analysis".bold())?;
        writeln!(out)?;

        if !report.analysis.conda_packages.is_empty() {
            writeln!(
                out,
                "Conda channel ({}):",
                report.analysis.conda_packages.len()
            )?;
            for classification in &report.analysis.conda_packages {
                writeln!(out, "  {}", render_conda_entry(classification))?;
            }
            writeln!(out)?;
        }

        if !report.analysis.pip_packages.is_empty() {
            writeln!(out, "Pip channel ({}):", report.analysis.pip_packages.len())?;
            for classification in &report.analysis.pip_packages {
                writeln!(
                    out,
                    "  {}  {}",
                    classification.original.cyan(),
                    classification.reason.dimmed()
                )?;
            }
            writeln!(out)?;
        }

        if report.analysis.is_empty() {
            writeln!(out, "{}", "Nothing to classify.".yellow())?;
            writeln!(out)?;
        }

        if !report.analysis.recommendations.is_empty() {
            writeln!(out, "{}", "Recommendations:".bold())?;
            for recommendation in &report.analysis.recommendations {
                writeln!(out, "  • {}", recommendation.yellow())?;
            }
            writeln!(out)?;
        }

        if let Some(resolution) = &report.resolution {
            render_resolution(&mut out, resolution)?;
        }

        Ok(out)
    }
}

fn render_dependents(result: &ClassificationResult) -> String {
    if result.dependents.is_empty() {
        return "none".to_string();
    }
    let shown: Vec<&str> = result
        .dependents
        .iter()
        .take(MAX_DEPENDENTS_SHOWN)
        .map(|name| name.as_str())
        .collect();
    let mut rendered = shown.join(", ");
    let hidden = result.dependents.len().saturating_sub(MAX_DEPENDENTS_SHOWN);
    if hidden > 0 {
        write!(rendered, " (+{} more)", hidden).ok();
    }
    rendered
}

fn render_conda_entry(classification: &SourceClassification) -> String {
    let original = classification.original.cyan().to_string();
    match classification.conda_name.as_deref() {
        Some(conda_name) if conda_name != classification.original => {
            format!(
                "{} -> {}  {}",
                original,
                conda_name.green(),
                classification.reason.dimmed()
            )
        }
        _ => format!("{}  {}", original, classification.reason.dimmed()),
    }
}

fn render_resolution(out: &mut String, resolution: &HybridResolution) -> Result<()> {
    match resolution {
        HybridResolution::CondaHybrid {
            environment,
            conda_count,
            pip_count,
            ..
        } => {
            writeln!(
                out,
                "{}",
                format!(
                    "Hybrid environment ({} conda, {} pip):",
                    conda_count, pip_count
                )
                .bold()
            )?;
            writeln!(out)?;
            out.push_str(&environment.to_yaml()?);
        }
        HybridResolution::Pip { packages, .. } => {
            writeln!(out, "{}", "Pip-only environment:".bold())?;
            for package in packages {
                writeln!(out, "  {}", package)?;
            }
        }
    }
    Ok(())
}
