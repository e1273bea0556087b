//! dpkg-diff - compare two dpkg package listings
//!
//! This library parses `dpkg -l` snapshots, computes which packages were
//! removed, added or changed between them, and classifies each version
//! change as an upgrade or a downgrade using `dpkg --compare-versions`.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`package_diff`): Listing model, parser and differ
//! - **Application Layer** (`application`): The diff use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, dpkg process and console implementations
//! - **Shared** (`shared`): Error types, result alias and file checks
//!
//! # Example
//!
//! ```no_run
//! use dpkg_diff::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = DiffListingsUseCase::new(
//!     FileSystemReader::new(),
//!     DpkgVersionComparator::new(),
//!     StderrProgressReporter::quiet(),
//! );
//!
//! let request = DiffRequest::new(PathBuf::from("before.txt"), PathBuf::from("after.txt"));
//! let response = use_case.execute(request)?;
//!
//! print!("{}", TextFormatter::new().format(&response.result));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod package_diff;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::FileSystemReader;
    pub use crate::adapters::outbound::formatters::TextFormatter;
    pub use crate::adapters::outbound::process::DpkgVersionComparator;
    pub use crate::application::dto::{DiffRequest, DiffResponse};
    pub use crate::application::use_cases::DiffListingsUseCase;
    pub use crate::package_diff::domain::{
        ChangeDirection, DiffResult, DiffSummary, ListingDiff, PackageRecord, ParseSummary,
        StatusListing, VersionChange, VersionPair,
    };
    pub use crate::package_diff::services::{ListingDiffer, ListingParser, ParsedListing};
    pub use crate::ports::outbound::{
        DiffFormatter, ListingReader, OutputPresenter, ProgressReporter, VersionComparator,
    };
    pub use crate::shared::error::{DiffError, ExitCode};
    pub use crate::shared::Result;
}
