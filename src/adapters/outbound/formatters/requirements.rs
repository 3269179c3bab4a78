use crate::application::dto::DetectReport;

/// Renders the primary packages of a detection report as a pip-style pin
/// list, one `name==version` per line.
pub fn render_requirements(report: &DetectReport) -> String {
    let mut out = String::from("# Primary dependencies detected by pyprov\n\n");
    for result in &report.packages {
        if result.package.version.is_empty() {
            out.push_str(&format!("{}\n", result.package.name));
        } else {
            out.push_str(&format!(
                "{}=={}\n",
                result.package.name, result.package.version
            ));
        }
    }
    out
}
