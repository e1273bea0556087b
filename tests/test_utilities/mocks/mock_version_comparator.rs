use dpkg_diff::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock VersionComparator with scripted answers
///
/// Pairs without a scripted answer fail, like a comparator that
/// rejects the version syntax.
#[derive(Default, Clone)]
pub struct MockVersionComparator {
    answers: HashMap<(String, String), bool>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockVersionComparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts `from < to` to answer `true`
    pub fn with_less_than(mut self, from: &str, to: &str) -> Self {
        self.answers
            .insert((from.to_string(), to.to_string()), true);
        self
    }

    /// Scripts `from < to` to answer `false`
    pub fn with_not_less_than(mut self, from: &str, to: &str) -> Self {
        self.answers
            .insert((from.to_string(), to.to_string()), false);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl VersionComparator for MockVersionComparator {
    fn is_less_than(&self, from: &str, to: &str) -> Result<bool> {
        let key = (from.to_string(), to.to_string());
        self.calls.lock().unwrap().push(key.clone());
        match self.answers.get(&key) {
            Some(answer) => Ok(*answer),
            None => Err(DiffError::ComparatorError {
                program: "mock".to_string(),
                details: format!("no answer scripted for {} < {}", from, to),
            }
            .into()),
        }
    }
}
