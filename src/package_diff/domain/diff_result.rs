use std::collections::BTreeMap;
use std::fmt;

/// Outcome of asking the version comparator whether `from < to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    /// The comparator confirmed `from < to`
    Upgrade,
    /// The comparator answered that `from` is not less than `to`
    Downgrade,
    /// The comparator could not give an answer
    Unknown,
}

impl ChangeDirection {
    pub fn is_upgrade(self) -> bool {
        matches!(self, ChangeDirection::Upgrade)
    }
}

impl fmt::Display for ChangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeDirection::Upgrade => write!(f, "upgrade"),
            ChangeDirection::Downgrade => write!(f, "downgrade"),
            ChangeDirection::Unknown => write!(f, "unknown"),
        }
    }
}

/// Old and new version of a package present in both listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPair {
    pub from: String,
    pub to: String,
}

impl VersionPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.to.clone(), self.from.clone())
    }
}

/// A version pair after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pub from: String,
    pub to: String,
    pub direction: ChangeDirection,
}

/// Unclassified difference between two listings
///
/// The three maps never share a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDiff {
    pub deleted: BTreeMap<String, String>,
    pub added: BTreeMap<String, String>,
    pub changed: BTreeMap<String, VersionPair>,
}

impl ListingDiff {
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.added.is_empty() && self.changed.is_empty()
    }

    /// Resolves every changed pair into a direction
    ///
    /// `classify` is called once per changed package, in name order.
    pub fn classify<F>(self, mut classify: F) -> DiffResult
    where
        F: FnMut(&str, &VersionPair) -> ChangeDirection,
    {
        let changed = self
            .changed
            .into_iter()
            .map(|(name, pair)| {
                let direction = classify(&name, &pair);
                let change = VersionChange {
                    from: pair.from,
                    to: pair.to,
                    direction,
                };
                (name, change)
            })
            .collect();

        DiffResult {
            deleted: self.deleted,
            added: self.added,
            changed,
        }
    }
}

/// Classified difference between two listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    deleted: BTreeMap<String, String>,
    added: BTreeMap<String, String>,
    changed: BTreeMap<String, VersionChange>,
}

impl DiffResult {
    pub fn deleted(&self) -> &BTreeMap<String, String> {
        &self.deleted
    }

    pub fn added(&self) -> &BTreeMap<String, String> {
        &self.added
    }

    pub fn changed(&self) -> &BTreeMap<String, VersionChange> {
        &self.changed
    }

    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.added.is_empty() && self.changed.is_empty()
    }

    pub fn summary(&self) -> DiffSummary {
        let count = |direction| {
            self.changed
                .values()
                .filter(|c| c.direction == direction)
                .count()
        };

        DiffSummary {
            deleted: self.deleted.len(),
            added: self.added.len(),
            upgraded: count(ChangeDirection::Upgrade),
            downgraded: count(ChangeDirection::Downgrade),
            unknown: count(ChangeDirection::Unknown),
        }
    }
}

/// Per-category counts of a [`DiffResult`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub deleted: usize,
    pub added: usize,
    pub upgraded: usize,
    pub downgraded: usize,
    pub unknown: usize,
}

impl DiffSummary {
    pub fn changed(&self) -> usize {
        self.upgraded + self.downgraded + self.unknown
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} removed, {} added, {} changed ({} upgraded, {} downgraded",
            self.deleted,
            self.added,
            self.changed(),
            self.upgraded,
            self.downgraded
        )?;
        if self.unknown > 0 {
            write!(f, ", {} unknown", self.unknown)?;
        }
        write!(f, ")")
    }
}
