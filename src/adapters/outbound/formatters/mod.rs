pub mod json_formatter;
pub mod requirements;
pub mod text_formatter;

pub use json_formatter::JsonReportFormatter;
pub use requirements::render_requirements;
pub use text_formatter::TextReportFormatter;
