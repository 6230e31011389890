//! # History Trait Hierarchy
//!
//! Two small traits split a bounded history into its producer-facing and
//! reader-facing halves. [`HistoryBucket`](crate::history::HistoryBucket)
//! implements both; anything else that models the same contract (a
//! reference model in tests, an adapter around another store) can implement
//! them and be driven by the same generic code.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────┐
//!   │          HistoryStore<T>            │
//!   │                                     │
//!   │  insert(&mut, T) → Option<T>        │
//!   │  flush(&mut)                        │
//!   │  live_count(&) → usize              │
//!   │  capacity(&) → usize                │
//!   │  is_empty(&) → bool                 │
//!   └──────────────────┬──────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────┐
//!   │        DifferentialAccess<T>        │
//!   │                                     │
//!   │  init_accessor(&mut)                │
//!   │  fetch(&mut) → Option<T>            │
//!   │  pending(&) → usize                 │
//!   │  fetch_into(&mut, &mut Vec<T>)      │
//!   └─────────────────────────────────────┘
//! ```
//!
//! ## Contract
//!
//! | Operation        | Never fails | Resets reader progress |
//! |------------------|-------------|------------------------|
//! | `insert`         | yes         | no                     |
//! | `flush`          | yes         | yes                    |
//! | `init_accessor`  | yes         | yes                    |
//! | `fetch`          | yes         | no                     |
//!
//! `fetch` returns `None` only when nothing is pending; it never encodes
//! "no value" inside `T`.
//!
//! ## Example Usage
//!
//! ```
//! use histkit::history::HistoryBucket;
//! use histkit::traits::{DifferentialAccess, HistoryStore};
//!
//! fn produce<H: HistoryStore<u32>>(history: &mut H, values: &[u32]) {
//!     for &v in values {
//!         history.insert(v);
//!     }
//! }
//!
//! fn transfer<H: DifferentialAccess<u32>>(history: &mut H) -> Vec<u32> {
//!     let mut out = Vec::new();
//!     history.fetch_into(&mut out);
//!     out
//! }
//!
//! let mut bucket = HistoryBucket::new(4);
//! produce(&mut bucket, &[1, 2, 3]);
//! assert_eq!(transfer(&mut bucket), vec![1, 2, 3]);
//! assert_eq!(transfer(&mut bucket), Vec::<u32>::new());
//! ```

/// Producer-facing half of a bounded history.
pub trait HistoryStore<T> {
    /// Inserts `value` as the newest entry.
    ///
    /// Returns the oldest entry if it had to be evicted to make room.
    fn insert(&mut self, value: T) -> Option<T>;

    /// Drops every live entry and resets reader progress.
    fn flush(&mut self);

    /// Number of entries currently retained.
    fn live_count(&self) -> usize;

    /// Maximum number of entries retained.
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.live_count() == 0
    }
}

/// Reader-facing half: incremental, oldest-first transfer of new entries.
pub trait DifferentialAccess<T>: HistoryStore<T> {
    /// Marks every live entry as not yet transferred.
    fn init_accessor(&mut self);

    /// Returns the oldest entry not yet transferred, if any.
    fn fetch(&mut self) -> Option<T>;

    /// Number of entries `fetch` would still return.
    fn pending(&self) -> usize;

    /// Fetches until exhausted, appending to `out`.
    ///
    /// Returns the number of values appended.
    fn fetch_into(&mut self, out: &mut Vec<T>) -> usize {
        let before = out.len();
        out.reserve(self.pending());
        while let Some(value) = self.fetch() {
            out.push(value);
        }
        out.len() - before
    }
}
