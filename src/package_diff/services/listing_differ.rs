use crate::package_diff::domain::{ListingDiff, StatusListing, VersionPair};

/// ListingDiffer - three-way difference between two listings
///
/// Pure function: no I/O, no failure modes.
pub struct ListingDiffer;

impl ListingDiffer {
    /// Computes the difference from `old` to `new`
    ///
    /// # Returns
    /// - `deleted`: names only in `old`, with the old version
    /// - `added`: names only in `new`, with the new version
    /// - `changed`: names in both whose version strings differ
    ///
    /// Names with identical versions appear in none of the three.
    pub fn diff(old: &StatusListing, new: &StatusListing) -> ListingDiff {
        let mut diff = ListingDiff::default();

        for (name, old_version) in old {
            match new.version_of(name) {
                None => {
                    diff.deleted.insert(name.clone(), old_version.clone());
                }
                Some(new_version) if new_version != old_version.as_str() => {
                    diff.changed.insert(
                        name.clone(),
                        VersionPair::new(old_version.clone(), new_version),
                    );
                }
                Some(_) => {}
            }
        }

        for (name, new_version) in new {
            if !old.contains(name) {
                diff.added.insert(name.clone(), new_version.clone());
            }
        }

        diff
    }
}
