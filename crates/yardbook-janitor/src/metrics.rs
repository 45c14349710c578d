//! Counters accumulated across maintenance sweeps

/// Metrics collected during Janitor operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JanitorMetrics {
    /// Archived shot types permanently deleted
    pub purged_shot_types: usize,

    /// Clubs that received a generated nickname
    pub nicknames_backfilled: usize,

    /// Shot types a dry run would have purged
    pub purge_candidates: usize,

    /// Total sweep iterations completed
    pub sweep_count: usize,

    /// Total runtime in seconds
    pub total_runtime_secs: u64,

    /// Timestamp of the last completed sweep
    pub last_sweep_at: Option<u64>,
}

impl JanitorMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record purged shot types
    pub fn record_purge(&mut self, count: usize) {
        self.purged_shot_types += count;
    }

    /// Record backfilled nicknames
    pub fn record_backfill(&mut self, count: usize) {
        self.nicknames_backfilled += count;
    }

    /// Record shot types found expired during a dry run
    pub fn record_candidates(&mut self, count: usize) {
        self.purge_candidates += count;
    }

    /// Record a sweep cycle completion
    pub fn record_sweep(&mut self, at: u64) {
        self.sweep_count += 1;
        self.last_sweep_at = Some(at);
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Janitor Metrics Summary".to_string(),
            "======================".to_string(),
            format!("Sweep cycles: {}", self.sweep_count),
            format!("Total runtime: {}s", self.total_runtime_secs),
            format!("Purged shot types: {}", self.purged_shot_types),
            format!("Nicknames backfilled: {}", self.nicknames_backfilled),
        ];
        if self.purge_candidates > 0 {
            lines.push(format!("Dry-run purge candidates: {}", self.purge_candidates));
        }
        lines.join("\n")
    }
}
