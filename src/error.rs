//! Error types for the histkit library.
//!
//! None of the history operations fail: insertion, flush, and fetch are total
//! over every buffer state. Errors only appear at the edges.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when internal bookkeeping is inconsistent
//!   (`check_invariants` methods on the ring, cursor, and bucket).
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (zero capacity).
//!
//! ## Example Usage
//!
//! ```
//! use histkit::error::ConfigError;
//! use histkit::history::HistoryBucket;
//!
//! // Fallible constructor for user-configurable capacity
//! let bucket: Result<HistoryBucket<u16>, ConfigError> = HistoryBucket::try_new(7);
//! assert!(bucket.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = HistoryBucket::<u16>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal history invariants are violated.
///
/// Produced by `check_invariants` methods such as
/// [`HistoryBucket::check_invariants`](crate::history::HistoryBucket::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when history configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`HistoryBucket::try_new`](crate::history::HistoryBucket::try_new) and
/// [`HistoryBuilder::try_build`](crate::builder::HistoryBuilder::try_build).
///
/// # Example
///
/// ```
/// use histkit::history::HistoryBucket;
///
/// let err = HistoryBucket::<u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
