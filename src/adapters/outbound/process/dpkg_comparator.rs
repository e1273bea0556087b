use crate::ports::outbound::VersionComparator;
use crate::shared::error::DiffError;
use crate::shared::Result;
use std::process::{Command, Stdio};

/// Program used when no comparator is configured
pub const DEFAULT_COMPARATOR: &str = "dpkg";

/// Relation passed to `--compare-versions`
///
/// `lt` is strict; dpkg's legacy `<` means `<=`.
const STRICTLY_LESS_THAN: &str = "lt";

/// DpkgVersionComparator adapter that shells out to `dpkg --compare-versions`
///
/// Exit status 0 means the relation holds and 1 means it does not.
/// dpkg reports bad version syntax with status 2, which is surfaced
/// as an error together with whatever it printed on stderr.
pub struct DpkgVersionComparator {
    program: String,
}

impl DpkgVersionComparator {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_COMPARATOR)
    }

    /// Uses another executable that accepts
    /// `--compare-versions <a> lt <b>`
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn comparator_error(&self, details: String) -> anyhow::Error {
        DiffError::ComparatorError {
            program: self.program.clone(),
            details,
        }
        .into()
    }
}

impl Default for DpkgVersionComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionComparator for DpkgVersionComparator {
    fn is_less_than(&self, from: &str, to: &str) -> Result<bool> {
        let output = Command::new(&self.program)
            .args(["--compare-versions", from, STRICTLY_LESS_THAN, to])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.comparator_error(format!("could not be started: {}", e)))?;

        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stderr = stderr.trim();
                let details = if stderr.is_empty() {
                    output.status.to_string()
                } else {
                    format!("{} ({})", output.status, stderr)
                };
                Err(self.comparator_error(details))
            }
        }
    }
}
