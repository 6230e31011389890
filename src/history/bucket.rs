//! Bounded history bucket with a differential accessor.
//!
//! A [`HistoryBucket`] keeps the most recent `capacity` values and lets one
//! reader pull only what it has not seen yet, oldest first. Once the bucket
//! is full every insert evicts the oldest value; if that value was still
//! pending, the reader never sees it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                   HistoryBucket<T> (capacity = 7)                           │
//! │                                                                             │
//! │   ring: HistoryRing<T>        cursor: DiffCursor                            │
//! │                                                                             │
//! │   Logical view after inserting 1..=10 and fetching 4, 5:                    │
//! │                                                                             │
//! │   index:     0    1    2    3    4    5    6                                │
//! │            ┌────┬────┬────┬────┬────┬────┬────┐                             │
//! │   value:   │ 10 │  9 │  8 │  7 │  6 │  5 │  4 │                             │
//! │            └────┴────┴────┴────┴────┴────┴────┘                             │
//! │             ◄──────── pending = 5 ───────►                                  │
//! │                                                                             │
//! │   next fetch() → ring[pending - 1] = ring[4] = 6, pending becomes 4         │
//! │                                                                             │
//! │   insert(11): ring evicts 4 (already read), pending 5 → 6                   │
//! │   insert(12): ring evicts 5 (already read), pending 6 → 7                   │
//! │   insert(13): ring evicts 6 (pending, lost), pending stays 7                │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation            | Description                                   | Complexity |
//! |----------------------|-----------------------------------------------|------------|
//! | [`insert`]           | Add newest value, evict oldest when full      | O(1)       |
//! | [`flush`]            | Drop all values, reset reader                 | O(1)       |
//! | [`live_count`]       | Number of retained values                     | O(1)       |
//! | [`init_accessor`]    | Mark every live value as pending              | O(1)       |
//! | [`fetch`]            | Oldest pending value                          | O(1)       |
//! | [`peek_pending`]     | Next `fetch` result without consuming it      | O(1)       |
//! | [`drain`]            | Iterator that fetches until exhausted         | O(pending) |
//! | [`fetch_into`]       | Append every pending value to a `Vec`         | O(pending) |
//!
//! [`insert`]: HistoryBucket::insert
//! [`flush`]: HistoryBucket::flush
//! [`live_count`]: HistoryBucket::live_count
//! [`init_accessor`]: HistoryBucket::init_accessor
//! [`fetch`]: HistoryBucket::fetch
//! [`peek_pending`]: HistoryBucket::peek_pending
//! [`drain`]: HistoryBucket::drain
//! [`fetch_into`]: HistoryBucket::fetch_into
//!
//! ## Example Usage
//!
//! ```
//! use histkit::history::HistoryBucket;
//!
//! let mut bucket = HistoryBucket::new(7);
//! for v in 1..=7u16 {
//!     bucket.insert(v);
//! }
//! assert_eq!(bucket.drain().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! // Three more evict 1, 2, 3 but only the new values are pending
//! for v in 8..=10 {
//!     bucket.insert(v);
//! }
//! assert_eq!(bucket.drain().collect::<Vec<_>>(), vec![8, 9, 10]);
//!
//! // Re-initializing replays everything still live
//! bucket.init_accessor();
//! assert_eq!(bucket.drain().collect::<Vec<_>>(), vec![4, 5, 6, 7, 8, 9, 10]);
//! ```
//!
//! ## Thread Safety
//!
//! `HistoryBucket` is not thread-safe and supports exactly one reader
//! cursor. Wrap it in the caller's own lock if it must be shared.

use std::fmt;

use crate::ds::history_ring::Iter;
use crate::ds::{DiffCursor, HistoryRing};
use crate::error::{ConfigError, InvariantError};
use crate::history::drain::Drain;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::HistoryMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::HistoryMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    HistoryMetricsReadRecorder, HistoryMetricsRecorder, MetricsReset, MetricsSnapshotProvider,
};
use crate::traits::{DifferentialAccess, HistoryStore};

/// Bounded, overwrite-oldest history with a single differential reader.
///
/// # Example
///
/// ```
/// use histkit::history::HistoryBucket;
///
/// let mut bucket = HistoryBucket::new(3);
///
/// // A value inserted before any read is immediately fetchable
/// bucket.insert(42u64);
/// assert_eq!(bucket.fetch(), Some(42));
/// assert_eq!(bucket.fetch(), None);
///
/// // Overflow while nothing is read keeps only the newest three
/// for v in 1..=5 {
///     bucket.insert(v);
/// }
/// assert_eq!(bucket.pending(), 3);
/// assert_eq!(bucket.fetch(), Some(3));
/// ```
#[derive(Clone)]
pub struct HistoryBucket<T> {
    ring: HistoryRing<T>,
    cursor: DiffCursor,
    #[cfg(feature = "metrics")]
    metrics: HistoryMetrics,
}

impl<T: Copy> HistoryBucket<T> {
    /// Creates an empty bucket that retains at most `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(bucket) => bucket,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates an empty bucket, returning an error on invalid capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use histkit::history::HistoryBucket;
    ///
    /// let bucket = HistoryBucket::<u16>::try_new(7).unwrap();
    /// assert_eq!(bucket.capacity(), 7);
    /// assert!(HistoryBucket::<u16>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new(
                "history capacity must be greater than zero",
            ));
        }
        Ok(Self {
            ring: HistoryRing::new(capacity),
            cursor: DiffCursor::new(),
            #[cfg(feature = "metrics")]
            metrics: HistoryMetrics::default(),
        })
    }

    /// Returns the maximum number of values retained.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns the number of values currently retained.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.ring.len()
    }

    /// Same as [`live_count`](Self::live_count).
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if no values are retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns `true` if the next insert will evict the oldest value.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Inserts `value` as the newest entry and makes it pending.
    ///
    /// When the bucket is full the oldest value is evicted and returned. If
    /// it was still pending it is lost to the reader; the pending count then
    /// stays at `capacity` instead of growing.
    ///
    /// # Example
    ///
    /// ```
    /// use histkit::history::HistoryBucket;
    ///
    /// let mut bucket = HistoryBucket::new(2);
    /// assert_eq!(bucket.insert(1u8), None);
    /// assert_eq!(bucket.insert(2), None);
    /// assert_eq!(bucket.insert(3), Some(1));
    /// assert_eq!(bucket.pending(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let evicted = self.ring.push(value);
        self.cursor.on_insert(self.ring.capacity());

        #[cfg(feature = "metrics")]
        if evicted.is_some() {
            self.metrics.record_eviction();
        }

        evicted
    }

    /// Drops every value and resets the reader.
    ///
    /// Values inserted but never fetched are discarded as well.
    pub fn flush(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_flush();

        self.ring.clear();
        self.cursor.clear();
    }

    /// Restarts the transfer: every live value becomes pending again.
    ///
    /// Calling it twice without an insert in between is a no-op.
    pub fn init_accessor(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_accessor_init();

        self.cursor.reset_to(self.ring.len());
    }

    /// Returns the oldest pending value and consumes it.
    ///
    /// Returns `None` when nothing is pending or the bucket is empty; state
    /// is left untouched in that case, so repeated calls keep returning
    /// `None` until the next insert or [`init_accessor`](Self::init_accessor).
    pub fn fetch(&mut self) -> Option<T> {
        match self.cursor.advance(self.ring.len()) {
            Some(index) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_fetch_hit();
                self.ring.get(index)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_fetch_miss();
                None
            },
        }
    }

    /// Returns the value the next [`fetch`](Self::fetch) would return,
    /// without consuming it.
    pub fn peek_pending(&self) -> Option<T> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();

        let value = self
            .cursor
            .peek(self.ring.len())
            .and_then(|index| self.ring.get(index));

        #[cfg(feature = "metrics")]
        if value.is_some() {
            (&self.metrics).record_peek_found();
        }

        value
    }

    /// Returns how many values [`fetch`](Self::fetch) would still return.
    #[inline]
    pub fn pending(&self) -> usize {
        self.cursor.pending()
    }

    /// Returns `true` if the next [`fetch`](Self::fetch) will return a value.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.cursor.pending() > 0 && !self.ring.is_empty()
    }

    /// Returns an iterator that fetches pending values, oldest first.
    ///
    /// Values left unconsumed when the iterator is dropped stay pending.
    ///
    /// # Example
    ///
    /// ```
    /// use histkit::history::HistoryBucket;
    ///
    /// let mut bucket = HistoryBucket::new(5);
    /// for v in [10u32, 20, 30] {
    ///     bucket.insert(v);
    /// }
    ///
    /// let first: Vec<_> = bucket.drain().take(2).collect();
    /// assert_eq!(first, vec![10, 20]);
    /// assert_eq!(bucket.pending(), 1);
    /// assert_eq!(bucket.drain().len(), 1);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Fetches every pending value into `out`, oldest first.
    ///
    /// Returns the number of values transferred.
    pub fn fetch_into(&mut self, out: &mut Vec<T>) -> usize {
        let before = out.len();
        out.extend(self.drain());
        out.len() - before
    }

    /// Marks every pending value as transferred without returning it.
    ///
    /// Equivalent to draining and discarding. Already transferred values
    /// never become pending again through this call.
    pub fn mark_all_read(&mut self) {
        self.cursor.clear();
    }

    /// Returns the value at logical `index` (`0` = newest).
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.ring.get(index)
    }

    /// Returns the most recently inserted value.
    #[inline]
    pub fn newest(&self) -> Option<T> {
        self.ring.newest()
    }

    /// Returns the oldest retained value, the next one to be evicted.
    #[inline]
    pub fn oldest(&self) -> Option<T> {
        self.ring.oldest()
    }

    /// Iterates live values newest first, without touching the reader.
    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }

    /// Copies live values into a `Vec`, newest first.
    pub fn to_vec_newest_first(&self) -> Vec<T> {
        self.ring.to_vec_newest_first()
    }

    /// Copies live values into a `Vec`, oldest first.
    pub fn to_vec_oldest_first(&self) -> Vec<T> {
        self.ring.to_vec_oldest_first()
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.ring.approx_bytes()
            - std::mem::size_of::<HistoryRing<T>>()
    }

    /// Checks ring and cursor bookkeeping against each other.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] if the ring is inconsistent or more values
    /// are pending than are live.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.ring.check_invariants()?;
        self.cursor
            .check_invariants(self.ring.len(), self.ring.capacity())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }
}

#[cfg(feature = "metrics")]
impl<T: Copy> HistoryBucket<T> {
    pub fn metrics_snapshot(&self) -> HistoryMetricsSnapshot {
        self.metrics
            .snapshot_with(self.ring.len(), self.cursor.pending(), self.ring.capacity())
    }
}

#[cfg(feature = "metrics")]
impl<T: Copy> MetricsSnapshotProvider<HistoryMetricsSnapshot> for HistoryBucket<T> {
    fn snapshot(&self) -> HistoryMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<T: Copy> MetricsReset for HistoryBucket<T> {
    fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for HistoryBucket<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryBucket")
            .field("capacity", &self.ring.capacity())
            .field("newest_first", &self.ring.to_vec_newest_first())
            .field("pending", &self.cursor.pending())
            .finish()
    }
}

// Metrics are observational and excluded from equality.
impl<T: Copy + PartialEq> PartialEq for HistoryBucket<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ring == other.ring && self.cursor == other.cursor
    }
}

impl<T: Copy + Eq> Eq for HistoryBucket<T> {}

impl<T: Copy> HistoryStore<T> for HistoryBucket<T> {
    fn insert(&mut self, value: T) -> Option<T> {
        HistoryBucket::insert(self, value)
    }

    fn flush(&mut self) {
        HistoryBucket::flush(self)
    }

    fn live_count(&self) -> usize {
        HistoryBucket::live_count(self)
    }

    fn capacity(&self) -> usize {
        HistoryBucket::capacity(self)
    }
}

impl<T: Copy> DifferentialAccess<T> for HistoryBucket<T> {
    fn init_accessor(&mut self) {
        HistoryBucket::init_accessor(self)
    }

    fn fetch(&mut self) -> Option<T> {
        HistoryBucket::fetch(self)
    }

    fn pending(&self) -> usize {
        HistoryBucket::pending(self)
    }

    fn fetch_into(&mut self, out: &mut Vec<T>) -> usize {
        HistoryBucket::fetch_into(self, out)
    }
}

impl<'a, T: Copy> IntoIterator for &'a HistoryBucket<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
