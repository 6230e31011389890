//! Builder for history buckets.
//!
//! Collects construction parameters and validates them in one place, so
//! callers with user-supplied capacities can use the fallible
//! [`try_build`](HistoryBuilder::try_build) path.
//!
//! ## Example
//!
//! ```rust
//! use histkit::builder::HistoryBuilder;
//!
//! // Seed a bucket with values a reader has already seen
//! let mut bucket = HistoryBuilder::new(7)
//!     .prefill_as_read(true)
//!     .build_from([1u16, 2, 3]);
//!
//! assert_eq!(bucket.live_count(), 3);
//! assert_eq!(bucket.fetch(), None);
//!
//! bucket.insert(4);
//! assert_eq!(bucket.fetch(), Some(4));
//! ```

use crate::error::ConfigError;
use crate::history::HistoryBucket;

/// Builder for [`HistoryBucket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryBuilder {
    capacity: usize,
    prefill_as_read: bool,
}

impl HistoryBuilder {
    /// Starts a builder for a bucket retaining at most `capacity` values.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            prefill_as_read: false,
        }
    }

    /// Whether values passed to [`build_from`](Self::build_from) count as
    /// already transferred.
    ///
    /// Defaults to `false`: prefilled values are pending, exactly as if they
    /// had been inserted one by one.
    pub fn prefill_as_read(mut self, as_read: bool) -> Self {
        self.prefill_as_read = as_read;
        self
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Builds an empty bucket.
    ///
    /// # Panics
    ///
    /// Panics on invalid configuration. See [`try_build`](Self::try_build).
    pub fn build<T: Copy>(self) -> HistoryBucket<T> {
        self.build_from(std::iter::empty())
    }

    /// Builds a bucket, returning an error on invalid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn try_build<T: Copy>(self) -> Result<HistoryBucket<T>, ConfigError> {
        self.try_build_from(std::iter::empty())
    }

    /// Builds a bucket and inserts `values`, oldest first.
    ///
    /// # Panics
    ///
    /// Panics on invalid configuration. See [`try_build_from`](Self::try_build_from).
    pub fn build_from<T, I>(self, values: I) -> HistoryBucket<T>
    where
        T: Copy,
        I: IntoIterator<Item = T>,
    {
        match self.try_build_from(values) {
            Ok(bucket) => bucket,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds a bucket and inserts `values`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn try_build_from<T, I>(self, values: I) -> Result<HistoryBucket<T>, ConfigError>
    where
        T: Copy,
        I: IntoIterator<Item = T>,
    {
        let mut bucket = HistoryBucket::try_new(self.capacity)?;
        for value in values {
            bucket.insert(value);
        }
        if self.prefill_as_read {
            bucket.mark_all_read();
        }
        Ok(bucket)
    }
}
