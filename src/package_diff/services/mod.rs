mod listing_differ;
mod listing_parser;

pub use listing_differ::ListingDiffer;
pub use listing_parser::{ListingParser, ParsedListing};
