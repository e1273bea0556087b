use std::collections::btree_map;
use std::collections::BTreeMap;

/// StatusListing - installed packages at one point in time
///
/// Maps bare package name to version string. Keys iterate in
/// ascending byte order, which is the order the report prints in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusListing {
    packages: BTreeMap<String, String>,
}

impl StatusListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `name -> version`, returning the version it replaced
    pub fn insert(&mut self, name: String, version: String) -> Option<String> {
        self.packages.insert(name, version)
    }

    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.packages.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.packages.iter()
    }
}

impl FromIterator<(String, String)> for StatusListing {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            packages: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StatusListing {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Line counts gathered while parsing one listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    pub total_lines: usize,
    /// Lines with fewer than three fields
    pub malformed_lines: usize,
    /// Rows whose status is anything other than `ii`
    pub not_installed: usize,
    /// Installed rows dropped because of their architecture
    pub excluded_architecture: usize,
    /// Installed rows that replaced an earlier row with the same bare name
    pub overwritten: usize,
}
