pub mod diff_result;
pub mod package;
pub mod status_listing;

pub use diff_result::{
    ChangeDirection, DiffResult, DiffSummary, ListingDiff, VersionChange, VersionPair,
};
pub use package::{PackageRecord, EXCLUDED_ARCHITECTURE, INSTALLED_STATUS};
pub use status_listing::{ParseSummary, StatusListing};
