/// Process adapters that delegate to system programs
mod dpkg_comparator;

pub use dpkg_comparator::{DpkgVersionComparator, DEFAULT_COMPARATOR};
