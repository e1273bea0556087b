use crate::package_diff::domain::DiffResult;

/// DiffFormatter port for rendering a classified diff
///
/// Formatting cannot fail: the result is already fully built in memory.
pub trait DiffFormatter {
    /// Renders the diff as the text to present
    ///
    /// # Arguments
    /// * `result` - The classified difference between two listings
    ///
    /// # Returns
    /// The rendered report; empty when there are no differences
    fn format(&self, result: &DiffResult) -> String;
}
