use std::path::PathBuf;
use std::time::Duration;

use wincc_core::ConversionOutcome;
use wincc_model::ConversionRequest;

/// Result of one `ecs2wincc` run, as reported in the summary.
#[derive(Debug)]
pub struct RunResult {
    pub request: ConversionRequest,
    pub outcome: ConversionOutcome,
    /// Output document, `None` when nothing was written.
    pub written: Option<PathBuf>,
    pub dry_run: bool,
    pub duration: Duration,
}

impl RunResult {
    pub fn rows_written(&self) -> usize {
        if self.written.is_some() {
            self.outcome.table.len()
        } else {
            0
        }
    }
}
