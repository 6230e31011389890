//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* into small traits so
//! monitoring and test assertions stay decoupled from the history logic.
//!
//! ## Architecture
//!
//! ```text
//!        ┌──────────────────────────────┐     ┌──────────────────────────────┐
//!        │   HistoryMetricsRecorder     │     │ HistoryMetricsReadRecorder   │
//!        │  insert/evict/flush          │     │  peek (through &self)        │
//!        │  accessor init/fetch         │     │                              │
//!        └──────────────┬───────────────┘     └──────────────┬───────────────┘
//!                       │                                    │
//!                       └─────────────────┬──────────────────┘
//!                                         ▼
//!                               ┌───────────────────┐
//!                               │  HistoryMetrics   │
//!                               └─────────┬─────────┘
//!                                         │
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Evictions are a property of the ring and are counted on every overflowing
//! insert. No counter tracks entries the accessor never delivered.

/// Counters for history mutation and differential reads.
pub trait HistoryMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_eviction(&mut self);
    fn record_flush(&mut self);
    fn record_accessor_init(&mut self);
    fn record_fetch_hit(&mut self);
    fn record_fetch_miss(&mut self);
}

/// Read-only history metrics for `&self` methods (uses interior mutability).
pub trait HistoryMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
