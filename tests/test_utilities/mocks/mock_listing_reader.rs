use dpkg_diff::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ListingReader serving listings from memory
#[derive(Default, Clone)]
pub struct MockListingReader {
    listings: HashMap<PathBuf, String>,
    pub reads: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockListingReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, path: &str, content: &str) -> Self {
        self.listings
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn read_paths(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl ListingReader for MockListingReader {
    fn read_listing(&self, path: &Path) -> Result<String> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        match self.listings.get(path) {
            Some(content) => Ok(content.clone()),
            None => Err(DiffError::ListingNotFound {
                path: path.to_path_buf(),
            }
            .into()),
        }
    }
}
