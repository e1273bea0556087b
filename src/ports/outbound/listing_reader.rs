use crate::shared::Result;
use std::path::Path;

/// ListingReader port for reading package listing snapshots
///
/// This port abstracts the file system operations needed to load
/// the text of a `dpkg -l` listing before it is parsed.
pub trait ListingReader {
    /// Reads the full text of the listing at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The listing does not exist
    /// - The path is a directory, or cannot be opened or read
    /// - The content exceeds the size limit
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_listing(&self, path: &Path) -> Result<String>;
}
