//! Terminal progress display for paint jobs

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::algorithm::job::PaintObserver;
use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} blocks"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking blocks painted in one job
///
/// Hidden bars accept updates without drawing, so callers can pass one
/// unconditionally.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ProgressManager {
    /// Visible bar labelled with `label`
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Bar that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Blocks reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total blocks of the current job
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Whether the job has been reported as finished
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl PaintObserver for ProgressManager {
    fn block_painted(&self, painted: usize, total: usize) {
        if self.bar.length() != Some(total as u64) {
            self.bar.set_length(total as u64);
        }
        self.bar.set_position(painted as u64);
    }

    fn job_finished(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(total as u64);
        self.bar.finish();
    }
}
