use crate::shared::error::DiffError;
use crate::shared::Result;
use std::path::PathBuf;

/// DiffRequest - Internal request DTO for the diff use case
#[derive(Debug, Clone)]
pub struct DiffRequest {
    /// Baseline listing (the "before" snapshot)
    pub old_listing: PathBuf,
    /// Listing compared against the baseline (the "after" snapshot)
    pub new_listing: PathBuf,
}

impl DiffRequest {
    pub fn new(old_listing: PathBuf, new_listing: PathBuf) -> Self {
        Self {
            old_listing,
            new_listing,
        }
    }

    pub fn builder() -> DiffRequestBuilder {
        DiffRequestBuilder::default()
    }
}

/// Builder for [`DiffRequest`]; both listings are required
#[derive(Debug, Default)]
pub struct DiffRequestBuilder {
    old_listing: Option<PathBuf>,
    new_listing: Option<PathBuf>,
}

impl DiffRequestBuilder {
    pub fn old_listing(mut self, path: impl Into<PathBuf>) -> Self {
        self.old_listing = Some(path.into());
        self
    }

    pub fn new_listing(mut self, path: impl Into<PathBuf>) -> Self {
        self.new_listing = Some(path.into());
        self
    }

    pub fn build(self) -> Result<DiffRequest> {
        let old_listing = self.old_listing.ok_or_else(|| DiffError::Validation {
            message: "old listing path is required".to_string(),
        })?;
        let new_listing = self.new_listing.ok_or_else(|| DiffError::Validation {
            message: "new listing path is required".to_string(),
        })?;
        Ok(DiffRequest::new(old_listing, new_listing))
    }
}
