use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::HistoryMetricsSnapshot;
use crate::metrics::traits::{HistoryMetricsReadRecorder, HistoryMetricsRecorder, MetricsReset};

/// Counters embedded in a [`HistoryBucket`](crate::history::HistoryBucket)
/// when the `metrics` feature is enabled.
#[derive(Debug, Default, Clone)]
pub struct HistoryMetrics {
    pub insert_calls: u64,
    pub evictions: u64,
    pub flush_calls: u64,
    pub accessor_inits: u64,
    pub fetch_hits: u64,
    pub fetch_misses: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
}

impl HistoryMetrics {
    pub fn new() -> HistoryMetrics {
        Self::default()
    }

    /// Copies the counters and attaches the given gauges.
    pub fn snapshot_with(
        &self,
        live_count: usize,
        pending: usize,
        capacity: usize,
    ) -> HistoryMetricsSnapshot {
        HistoryMetricsSnapshot {
            insert_calls: self.insert_calls,
            evictions: self.evictions,
            flush_calls: self.flush_calls,
            accessor_inits: self.accessor_inits,
            fetch_calls: self.fetch_hits + self.fetch_misses,
            fetch_hits: self.fetch_hits,
            fetch_misses: self.fetch_misses,
            peek_calls: self.peek_calls.get(),
            peek_found: self.peek_found.get(),
            live_count,
            pending,
            capacity,
        }
    }
}

impl HistoryMetricsRecorder for HistoryMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    fn record_flush(&mut self) {
        self.flush_calls += 1;
    }

    fn record_accessor_init(&mut self) {
        self.accessor_inits += 1;
    }

    fn record_fetch_hit(&mut self) {
        self.fetch_hits += 1;
    }

    fn record_fetch_miss(&mut self) {
        self.fetch_misses += 1;
    }
}

impl HistoryMetricsReadRecorder for &HistoryMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }
}

impl MetricsReset for HistoryMetrics {
    fn reset_metrics(&mut self) {
        *self = HistoryMetrics::default();
    }
}
