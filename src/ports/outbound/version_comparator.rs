use crate::shared::Result;

/// VersionComparator port for ordering Debian package versions
///
/// Debian ordering (epoch, upstream version, revision, `~` sorting
/// before everything) is owned by the package manager, so the
/// application asks it instead of comparing strings.
pub trait VersionComparator {
    /// Answers whether `from` is strictly less than `to`
    ///
    /// # Returns
    /// `Ok(true)` if `from < to`, `Ok(false)` if not
    ///
    /// # Errors
    /// Returns an error when the comparator cannot give an answer
    /// (not installed, crashed, rejected the version syntax)
    fn is_less_than(&self, from: &str, to: &str) -> Result<bool>;
}
