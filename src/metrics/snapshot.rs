/// Point-in-time copy of a bucket's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HistoryMetricsSnapshot {
    pub insert_calls: u64,
    pub evictions: u64, // inserts that pushed the oldest value out

    pub flush_calls: u64,
    pub accessor_inits: u64,

    pub fetch_calls: u64,
    pub fetch_hits: u64,
    pub fetch_misses: u64,

    pub peek_calls: u64,
    pub peek_found: u64,

    // gauges captured at snapshot time
    pub live_count: usize,
    pub pending: usize,
    pub capacity: usize,
}

impl HistoryMetricsSnapshot {
    /// Fraction of fetch calls that returned a value.
    ///
    /// Returns `0.0` when no fetch has been made.
    pub fn fetch_hit_rate(&self) -> f64 {
        if self.fetch_calls == 0 {
            0.0
        } else {
            self.fetch_hits as f64 / self.fetch_calls as f64
        }
    }

    /// Fraction of capacity currently holding live values.
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.live_count as f64 / self.capacity as f64
        }
    }
}
