use crate::ports::outbound::ListingReader;
use crate::shared::error::DiffError;
use crate::shared::security::{read_with_limit, validate_not_directory, MAX_LISTING_SIZE};
use crate::shared::Result;
use std::fs::File;
use std::io;
use std::path::Path;

/// FileSystemReader adapter for reading listings from the file system
///
/// Each listing is read in one go and the file is closed before the
/// next one is opened. Anything that can be opened and read works,
/// including `/dev/stdin` and process substitution (`<(dpkg -l)`).
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_LISTING_SIZE,
        }
    }

    /// Overrides the size limit (used by tests)
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Reads an opened listing after checking its type and size
    fn safe_read_file(&self, file: File, path: &Path) -> Result<Vec<u8>> {
        let metadata = file
            .metadata()
            .map_err(|e| anyhow::anyhow!("Failed to read listing metadata: {}", e))?;
        validate_not_directory(&metadata, path)?;

        read_with_limit(file, path, self.max_file_size)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingReader for FileSystemReader {
    fn read_listing(&self, path: &Path) -> Result<String> {
        let read_error = |details: String| DiffError::ListingReadError {
            path: path.to_path_buf(),
            details,
        };

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DiffError::ListingNotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
            Err(e) => return Err(read_error(e.to_string()).into()),
        };

        let bytes = self
            .safe_read_file(file, path)
            .map_err(|e| read_error(e.to_string()))?;

        // Invalid UTF-8 is replaced, never rejected
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
