use crate::application::dto::{DiffRequest, DiffResponse};
use crate::package_diff::domain::{ChangeDirection, DiffResult, ListingDiff, VersionPair};
use crate::package_diff::services::{ListingDiffer, ListingParser, ParsedListing};
use crate::ports::outbound::{ListingReader, ProgressReporter, VersionComparator};
use crate::shared::Result;
use std::path::Path;

/// DiffListingsUseCase - Core use case comparing two package listings
///
/// Orchestrates the pipeline: read and parse the old listing, then the
/// new one, diff them, and classify every version change through the
/// injected comparator. All infrastructure is injected generically.
///
/// # Type Parameters
/// * `LR` - ListingReader implementation
/// * `VC` - VersionComparator implementation
/// * `PR` - ProgressReporter implementation
pub struct DiffListingsUseCase<LR, VC, PR> {
    listing_reader: LR,
    version_comparator: VC,
    progress_reporter: PR,
}

impl<LR, VC, PR> DiffListingsUseCase<LR, VC, PR>
where
    LR: ListingReader,
    VC: VersionComparator,
    PR: ProgressReporter,
{
    /// Creates a new DiffListingsUseCase with injected dependencies
    pub fn new(listing_reader: LR, version_comparator: VC, progress_reporter: PR) -> Self {
        Self {
            listing_reader,
            version_comparator,
            progress_reporter,
        }
    }

    /// Executes the comparison
    ///
    /// # Errors
    /// Fails only if a listing cannot be read. Comparator failures are
    /// recorded as [`ChangeDirection::Unknown`] and reported as warnings.
    pub fn execute(&self, request: DiffRequest) -> Result<DiffResponse> {
        // Step 1: old listing is fully loaded before the new one is opened
        let old = self.load_listing(&request.old_listing)?;
        let new = self.load_listing(&request.new_listing)?;

        // Step 2: three-way diff
        let diff = ListingDiffer::diff(&old.listing, &new.listing);

        // Step 3: classify version changes
        let result = self.classify_changes(diff);

        self.progress_reporter
            .report_completion(&format!("✅ {}", result.summary()));

        Ok(DiffResponse::new(result, old.summary, new.summary))
    }

    fn load_listing(&self, path: &Path) -> Result<ParsedListing> {
        self.progress_reporter
            .report(&format!("📖 Loading package listing: {}", path.display()));

        let content = self.listing_reader.read_listing(path)?;
        let parsed = ListingParser::parse(&content);

        self.progress_reporter.report(&format!(
            "   - {} installed package(s) from {} line(s)",
            parsed.listing.len(),
            parsed.summary.total_lines
        ));
        if parsed.summary.excluded_architecture > 0 {
            self.progress_reporter.report(&format!(
                "   - {} i386 package(s) excluded",
                parsed.summary.excluded_architecture
            ));
        }
        if parsed.summary.overwritten > 0 {
            self.progress_reporter.report(&format!(
                "   - {} package(s) listed for several architectures; the last entry was kept",
                parsed.summary.overwritten
            ));
        }

        Ok(parsed)
    }

    /// Asks the comparator about each changed package, one at a time
    fn classify_changes(&self, diff: ListingDiff) -> DiffResult {
        let total = diff.changed.len();
        if total > 0 {
            self.progress_reporter.report(&format!(
                "🔍 Comparing versions of {} changed package(s)...",
                total
            ));
        }

        let mut done = 0;
        diff.classify(|name, pair| {
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some(name));
            self.classify(name, pair)
        })
    }

    fn classify(&self, name: &str, pair: &VersionPair) -> ChangeDirection {
        match self.version_comparator.is_less_than(&pair.from, &pair.to) {
            Ok(true) => ChangeDirection::Upgrade,
            Ok(false) => ChangeDirection::Downgrade,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not compare versions of {} ({} -> {}): {}",
                    name, pair.from, pair.to, e
                ));
                ChangeDirection::Unknown
            }
        }
    }
}
