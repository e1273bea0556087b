use crate::package_diff::domain::{PackageRecord, ParseSummary, StatusListing};

/// A listing together with the counts gathered while building it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedListing {
    pub listing: StatusListing,
    pub summary: ParseSummary,
}

/// ListingParser - turns `dpkg -l` output into a [`StatusListing`]
///
/// Pure domain logic: malformed lines are counted and skipped,
/// never reported as errors.
pub struct ListingParser;

impl ListingParser {
    /// Parses the full text of one listing
    ///
    /// Keeps rows with status `ii`, drops `i386` rows, and stores the
    /// bare package name. A later row for the same bare name replaces
    /// the earlier one.
    pub fn parse(content: &str) -> ParsedListing {
        let mut listing = StatusListing::new();
        let mut summary = ParseSummary::default();

        for line in content.lines() {
            summary.total_lines += 1;

            let Some(record) = PackageRecord::from_line(line) else {
                summary.malformed_lines += 1;
                continue;
            };

            if !record.is_installed() {
                summary.not_installed += 1;
                continue;
            }

            if record.has_excluded_architecture() {
                summary.excluded_architecture += 1;
                continue;
            }

            let (name, version) = record.into_entry();
            if listing.insert(name, version).is_some() {
                summary.overwritten += 1;
            }
        }

        ParsedListing { listing, summary }
    }
}
