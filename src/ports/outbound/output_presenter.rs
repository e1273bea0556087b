use crate::shared::Result;

/// OutputPresenter port for presenting the rendered report
///
/// Keeps the destination (stdout, or a buffer in tests) out of the use case.
pub trait OutputPresenter {
    /// Presents the formatted report
    ///
    /// # Arguments
    /// * `content` - The rendered report text
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    /// (e.g. a closed pipe)
    fn present(&self, content: &str) -> Result<()>;
}
