//! Exporting bucket metrics in Prometheus text format.
//!
//! Run with: cargo run --example metrics_export --features metrics

use histkit::history::HistoryBucket;
use histkit::metrics::exporter::PrometheusTextExporter;
use histkit::metrics::traits::{MetricsExporter, MetricsReset};

fn main() {
    let mut bucket = HistoryBucket::new(4);

    for v in 0..6u64 {
        bucket.insert(v);
    }
    while bucket.fetch().is_some() {}
    let _ = bucket.peek_pending();

    let snapshot = bucket.metrics_snapshot();
    println!(
        "hit rate: {:.2}, fill: {:.2}\n",
        snapshot.fetch_hit_rate(),
        snapshot.fill_ratio()
    );

    let exporter = PrometheusTextExporter::new("histkit", Vec::new());
    exporter.export(&snapshot);
    print!("{}", String::from_utf8_lossy(&exporter.into_inner()));

    bucket.reset_metrics();
    println!("\nafter reset: {} inserts", bucket.metrics_snapshot().insert_calls);
}

// Expected output (abridged):
// hit rate: 0.80, fill: 1.00
//
// histkit_insert_calls_total 6
// histkit_evictions_total 2
// histkit_fetch_hits_total 4
// histkit_fetch_misses_total 1
// ...
// after reset: 0 inserts
