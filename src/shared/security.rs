use crate::shared::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Maximum listing size (100 MB)
pub const MAX_LISTING_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that an opened path is not a directory
///
/// Regular files, pipes, FIFOs and character devices such as `/dev/stdin`
/// are all accepted. Symlinks are followed; the check applies to the target.
///
/// # Arguments
/// * `metadata` - Metadata of the opened file
/// * `path` - The path to the file (for error messages)
///
/// # Errors
/// Returns an error if the path is a directory
pub fn validate_not_directory(metadata: &fs::Metadata, path: &Path) -> Result<()> {
    if metadata.is_dir() {
        anyhow::bail!("{} is a directory", path.display());
    }
    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Arguments
/// * `file_size` - The size of the file in bytes
/// * `path` - The path to the file (for error messages)
/// * `max_size` - Maximum allowed size in bytes
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a stream to the end, stopping one byte past `max_size`
///
/// Streams without a known length (pipes, FIFOs) are bounded the same
/// way as regular files.
///
/// # Errors
/// Returns an error if reading fails or the stream exceeds `max_size`
pub fn read_with_limit<R: Read>(reader: R, path: &Path, max_size: u64) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read listing: {}", e))?;

    validate_file_size(buffer.len() as u64, path, max_size)?;
    Ok(buffer)
}
