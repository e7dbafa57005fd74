use std::time::{Duration, Instant};

/// Tracks progress through a fixed number of items and estimates time
/// remaining from the running average.
///
/// Unstarted until `start()`; there is no stopped state, the timer is simply
/// abandoned when the run ends.
#[derive(Debug, Default)]
pub struct ProgressTimer {
    total_items: usize,
    processed: usize,
    started_at: Option<Instant>,
}

impl ProgressTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time configuration of the denominator for percent/remaining.
    pub fn set_total(&mut self, total: usize) {
        self.total_items = total;
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Call exactly once per processed record. Clamped so `processed` never
    /// overshoots the declared total.
    pub fn tick(&mut self) {
        if self.processed < self.total_items {
            self.processed += 1;
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Percent of the declared total processed so far; 0.0 when the total
    /// is zero (an empty run never observes this).
    pub fn percent_complete(&self) -> f64 {
        if self.total_items == 0 {
            return 0.0;
        }
        self.processed as f64 / self.total_items as f64 * 100.0
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    /// Average time per processed item; zero before the first tick.
    pub fn average(&self) -> Duration {
        self.average_at(Instant::now())
    }

    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    // Clock-injectable variants keep the arithmetic deterministic in tests.

    fn start_at(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started) => now.saturating_duration_since(started),
            None => Duration::ZERO,
        }
    }

    fn average_at(&self, now: Instant) -> Duration {
        if self.processed == 0 {
            return Duration::ZERO;
        }
        self.elapsed_at(now) / self.processed as u32
    }

    fn remaining_at(&self, now: Instant) -> Duration {
        let left = self.total_items.saturating_sub(self.processed);
        self.average_at(now) * left as u32
    }
}

/// Renders a duration as `M:SS`. Minutes do not roll over into hours, so a
/// 90-minute estimate shows as `90:00`; display limitation only.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
