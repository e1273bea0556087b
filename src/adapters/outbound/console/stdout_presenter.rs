use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use anyhow::Context;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing the report to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .context("Failed to write report to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
        Ok(())
    }
}
