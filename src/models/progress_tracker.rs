use crate::utils::format_duration;
use std::time::Duration;

const DEFAULT_BAR_LENGTH: usize = 20;

/// Tracks a batch of equally sized work items and estimates the remaining time from the
/// average duration of the items finished so far.
pub struct ProgressTracker {
    total: usize,
    durations: Vec<Duration>,
    bar_length: usize,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        ProgressTracker {
            total,
            durations: Vec::new(),
            bar_length: DEFAULT_BAR_LENGTH,
        }
    }

    /// Records one finished item.
    pub fn record(&mut self, duration: Duration) {
        self.durations.push(duration);
    }

    pub fn completed(&self) -> usize {
        self.durations.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn elapsed(&self) -> Duration {
        self.durations.iter().sum()
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed().min(self.total) as f64 * 100.0 / self.total as f64
    }

    /// Average item duration times the items left; `None` before the first item finishes.
    pub fn estimate_remaining(&self) -> Option<Duration> {
        if self.durations.is_empty() {
            return None;
        }
        let remaining = self.total.saturating_sub(self.completed()) as u32;
        let average = self.elapsed() / self.durations.len() as u32;
        Some(average * remaining)
    }

    /// e.g. `Progress: [------->            ] 40 %	Estimated Execution Time: 00:01:30`
    pub fn progress_line(&self) -> String {
        let percent = self.percent();
        let dashes = ((percent / 100.0 * self.bar_length as f64) as usize).saturating_sub(1);
        let arrow = format!("{}>", "-".repeat(dashes));
        let spaces = " ".repeat(self.bar_length.saturating_sub(arrow.chars().count()));

        let estimate = self
            .estimate_remaining()
            .map(format_duration)
            .unwrap_or_else(|| "unknown".to_string());

        format!(
            "Progress: [{}{}] {} %\tEstimated Execution Time: {}",
            arrow, spaces, percent as usize, estimate
        )
    }
}
