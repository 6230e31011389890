use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::HistoryMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for history metrics snapshots.
///
/// Writes the Prometheus text exposition format so it can be scraped by
/// Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_metric("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_metric("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<HistoryMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &HistoryMetricsSnapshot) {
        self.write_counter(
            &self.metric_name("insert_calls_total"),
            snapshot.insert_calls,
        );
        self.write_counter(&self.metric_name("evictions_total"), snapshot.evictions);
        self.write_counter(&self.metric_name("flush_calls_total"), snapshot.flush_calls);
        self.write_counter(
            &self.metric_name("accessor_inits_total"),
            snapshot.accessor_inits,
        );
        self.write_counter(&self.metric_name("fetch_calls_total"), snapshot.fetch_calls);
        self.write_counter(&self.metric_name("fetch_hits_total"), snapshot.fetch_hits);
        self.write_counter(
            &self.metric_name("fetch_misses_total"),
            snapshot.fetch_misses,
        );
        self.write_counter(&self.metric_name("peek_calls_total"), snapshot.peek_calls);
        self.write_counter(&self.metric_name("peek_found_total"), snapshot.peek_found);
        self.write_gauge(&self.metric_name("live_count"), snapshot.live_count as u64);
        self.write_gauge(&self.metric_name("pending"), snapshot.pending as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
