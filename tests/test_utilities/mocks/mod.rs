/// Mock implementations for testing
mod mock_listing_reader;
mod mock_progress_reporter;
mod mock_version_comparator;

pub use mock_listing_reader::MockListingReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_version_comparator::MockVersionComparator;
