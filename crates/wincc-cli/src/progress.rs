//! Stage progress bar drawn on stderr.

use std::borrow::Cow;

use indicatif::{ProgressBar, ProgressStyle};

/// Stages reported by the progress bar, in order.
pub const STAGES: [&str; 4] = ["templates", "tags", "convert", "save"];

/// Thin wrapper over an `indicatif` bar with one step per stage.
pub struct StageProgress {
    bar: ProgressBar,
}

impl StageProgress {
    /// A visible bar. `indicatif` hides it when stderr is not a terminal.
    pub fn new() -> Self {
        let bar = ProgressBar::new(STAGES.len() as u64);
        let style = ProgressStyle::with_template("{prefix:>10} [{bar:20}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=> "))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_prefix("ecs2wincc");
        Self { bar }
    }

    /// A bar that never draws.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn start(&self, stage: &'static str) {
        self.bar.set_message(stage);
    }

    pub fn advance(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self, message: impl Into<Cow<'static, str>>) {
        self.bar.finish_with_message(message);
    }

    pub fn abandon(&self) {
        self.bar.abandon();
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for StageProgress {
    fn default() -> Self {
        Self::new()
    }
}
