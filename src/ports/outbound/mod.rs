/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the application core uses to reach
/// the file system, the package manager and the console.
pub mod formatter;
pub mod listing_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod version_comparator;

pub use formatter::DiffFormatter;
pub use listing_reader::ListingReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use version_comparator::VersionComparator;
