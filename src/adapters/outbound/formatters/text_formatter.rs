use crate::package_diff::domain::{DiffResult, VersionChange};
use crate::ports::outbound::DiffFormatter;
use std::fmt::Write;

/// Marker for a package only in the old listing
const DELETED_MARKER: &str = "D";
/// Marker for a package only in the new listing
const ADDED_MARKER: &str = "A";
const UPGRADE_MARKER: &str = "M^";
/// Used for confirmed downgrades and for changes the comparator could not classify
const NOT_UPGRADE_MARKER: &str = "Mv";

/// TextFormatter adapter producing the line-oriented diff report
///
/// Deleted, then added, then changed packages; each group in
/// ascending name order. One line per package:
///
/// ```text
/// D <name> <version>
/// A <name> <version>
/// M^ <name> <from> -> <to>
/// Mv <name> <from> -> <to>
/// ```
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn change_marker(change: &VersionChange) -> &'static str {
        if change.direction.is_upgrade() {
            UPGRADE_MARKER
        } else {
            NOT_UPGRADE_MARKER
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffFormatter for TextFormatter {
    fn format(&self, result: &DiffResult) -> String {
        let mut output = String::new();

        // Writing to a String cannot fail
        for (name, version) in result.deleted() {
            let _ = writeln!(output, "{} {} {}", DELETED_MARKER, name, version);
        }
        for (name, version) in result.added() {
            let _ = writeln!(output, "{} {} {}", ADDED_MARKER, name, version);
        }
        for (name, change) in result.changed() {
            let _ = writeln!(
                output,
                "{} {} {} -> {}",
                Self::change_marker(change),
                name,
                change.from,
                change.to
            );
        }

        output
    }
}
