use crate::package_diff::domain::{DiffResult, ParseSummary};

/// DiffResponse - Internal response DTO from the diff use case
#[derive(Debug, Clone)]
pub struct DiffResponse {
    /// Classified difference from the old listing to the new one
    pub result: DiffResult,
    /// Parsing counts for the old listing
    pub old_summary: ParseSummary,
    /// Parsing counts for the new listing
    pub new_summary: ParseSummary,
}

impl DiffResponse {
    pub fn new(result: DiffResult, old_summary: ParseSummary, new_summary: ParseSummary) -> Self {
        Self {
            result,
            old_summary,
            new_summary,
        }
    }
}
