use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts comparing snapshots in CI can tell a broken invocation
/// apart from an unreadable listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the diff was computed and printed (it may be empty)
    Success = 0,
    /// Application error (unreadable listing, stdout write failure, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for listing comparison.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hints next to each variant.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Package listing not found: {path}\n\n💡 Hint: Create a listing with `dpkg -l > listing.txt` and pass its path")]
    ListingNotFound { path: PathBuf },

    #[error("Failed to read package listing: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a readable text file produced by `dpkg -l`")]
    ListingReadError { path: PathBuf, details: String },

    #[error("Version comparator `{program}` failed: {details}")]
    ComparatorError { program: String, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
