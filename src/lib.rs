//! histkit: bounded history buffers with a differential accessor.
//!
//! A [`HistoryBucket`](history::HistoryBucket) retains the most recent
//! `capacity` values, evicting the oldest once full, and lets a single reader
//! transfer only the values it has not seen yet, oldest first. Values that
//! overflow while still unread are lost silently; everything else is
//! delivered exactly once.
//!
//! ```
//! use histkit::prelude::*;
//!
//! let mut bucket = HistoryBucket::new(7);
//! for v in 1..=10u16 {
//!     bucket.insert(v);
//! }
//!
//! // 1, 2, 3 overflowed before anyone read them
//! let mut transferred = Vec::new();
//! bucket.fetch_into(&mut transferred);
//! assert_eq!(transferred, vec![4, 5, 6, 7, 8, 9, 10]);
//! ```
//!
//! See `DESIGN.md` for the cursor invariants.

pub mod builder;
pub mod ds;
pub mod error;
pub mod history;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
