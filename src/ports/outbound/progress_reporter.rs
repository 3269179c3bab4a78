/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while stdout stays clean for report output.
pub trait ProgressReporter {
    /// Starts a long-running operation
    ///
    /// # Arguments
    /// * `message` - Description of the operation being started
    fn begin(&self, message: &str);

    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports a recoverable warning
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn warn(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn complete(&self, message: &str);
}
