pub use crate::builder::HistoryBuilder;
pub use crate::ds::{DiffCursor, HistoryRing};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::history::{Drain, HistoryBucket};
pub use crate::traits::{DifferentialAccess, HistoryStore};

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::HistoryMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
