//! Spinner tracking growth attempts and the longest walk so far

use crate::io::configuration::PROGRESS_TICK_MS;
use crate::walk::growth::AttemptReport;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Displays growth progress on the terminal
///
/// A hidden tracker still counts attempts, so callers can report totals
/// whether or not anything was drawn.
pub struct GrowthProgress {
    bar: ProgressBar,
    min_length: usize,
    attempts: usize,
    longest: usize,
}

impl GrowthProgress {
    /// Visible spinner for growing a walk of at least `min_length`
    pub fn new(min_length: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix("growing");
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self::with_bar(bar, min_length)
    }

    /// Tracker that draws nothing
    pub fn hidden(min_length: usize) -> Self {
        Self::with_bar(ProgressBar::hidden(), min_length)
    }

    fn with_bar(bar: ProgressBar, min_length: usize) -> Self {
        Self {
            bar,
            min_length,
            attempts: 0,
            longest: 0,
        }
    }

    /// Record a finished attempt
    pub fn record(&mut self, report: &AttemptReport) {
        self.attempts = report.attempt;
        self.longest = self.longest.max(report.longest);
        self.bar.set_position(report.attempt as u64);
        self.bar.set_message(self.status());
    }

    /// Attempts recorded so far
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Longest walk recorded so far
    pub const fn longest(&self) -> usize {
        self.longest
    }

    /// One-line status, e.g. `attempt 3, longest 42/100`
    pub fn status(&self) -> String {
        format!(
            "attempt {}, longest {}/{}",
            self.attempts, self.longest, self.min_length
        )
    }

    /// Clear the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
