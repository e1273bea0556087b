/// ProgressReporter port for reporting progress during a comparison
///
/// Implementations must never write to stdout, which carries the report.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports progress through the changed packages
    ///
    /// # Arguments
    /// * `current` - Number of packages classified so far
    /// * `total` - Number of changed packages
    /// * `message` - Optional message to include (usually the package name)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning; always shown, even in quiet mode
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the comparison
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
