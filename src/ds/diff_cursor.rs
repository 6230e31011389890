//! Differential cursor over a newest-first history.
//!
//! A [`DiffCursor`] counts how many live history entries a reader has not
//! yet been handed, measured from the oldest pending entry toward the
//! newest. In a newest-first history, logical index `i` is pending iff
//! `i < pending()`, so the next value to hand out is always at index
//! `pending() - 1` and successive fetches walk toward index `0`
//! (oldest-to-newest order).
//!
//! The cursor never touches storage. Its owner reports each event:
//!
//! ```text
//!   event                 cursor update
//!   ─────────────────     ─────────────────────────────────
//!   value inserted        pending = min(pending + 1, capacity)
//!   reader initialized    pending = live
//!   value fetched         pending = pending - 1 (if pending > 0 and live > 0)
//!   history flushed       pending = 0
//! ```
//!
//! ## Why the capped increment is enough
//!
//! The owner must keep `pending <= live` after every event. Insertions are
//! the only event that can break it, and split into two cases:
//!
//! - `live < capacity` before the insert: `live` grows by one and no entry is
//!   evicted. `pending + 1 <= live + 1`, and the cap can only lower it.
//! - `live == capacity` before the insert: `live` stays at `capacity` and the
//!   oldest entry (index `capacity - 1`) is evicted.
//!   - If `pending < capacity`, the evicted entry was not pending. Every
//!     pending entry moves one index older and the new entry joins at
//!     index `0`, so exactly one more entry is pending: `pending + 1 <= capacity`.
//!   - If `pending == capacity`, the evicted entry *was* pending. It is lost
//!     (−1) and the new entry is pending (+1), so `pending` stays at
//!     `capacity`, which is exactly what the cap yields.
//!
//! Growth and pending-eviction never happen on the same insert, so a single
//! `min(pending + 1, capacity)` accounts for both.
//!
//! ## Example Usage
//!
//! ```
//! use histkit::ds::DiffCursor;
//!
//! let capacity = 3;
//! let mut cursor = DiffCursor::new();
//!
//! // Three inserts, all pending
//! let mut live = 0;
//! for _ in 0..3 {
//!     live = (live + 1).min(capacity);
//!     cursor.on_insert(capacity);
//! }
//! assert_eq!(cursor.pending(), 3);
//!
//! // Oldest pending entry sits at logical index 2
//! assert_eq!(cursor.advance(live), Some(2));
//! assert_eq!(cursor.advance(live), Some(1));
//! assert_eq!(cursor.advance(live), Some(0));
//! assert_eq!(cursor.advance(live), None);
//! ```

use crate::error::InvariantError;

/// Count of history entries not yet handed to the reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DiffCursor {
    pending: usize,
}

impl DiffCursor {
    /// Creates an exhausted cursor.
    #[inline]
    pub const fn new() -> Self {
        Self { pending: 0 }
    }

    /// Returns how many live entries are still pending.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Records one insertion into a history holding at most `capacity` entries.
    #[inline]
    pub fn on_insert(&mut self, capacity: usize) {
        if self.pending < capacity {
            self.pending += 1;
        }
    }

    /// Marks every one of the `live` entries as pending.
    #[inline]
    pub fn reset_to(&mut self, live: usize) {
        self.pending = live;
    }

    /// Marks nothing as pending.
    #[inline]
    pub fn clear(&mut self) {
        self.pending = 0;
    }

    /// Returns the logical index of the next pending entry without consuming it.
    #[inline]
    pub fn peek(&self, live: usize) -> Option<usize> {
        if self.pending == 0 || live == 0 {
            return None;
        }
        Some(self.pending - 1)
    }

    /// Consumes the next pending entry, returning its logical index.
    ///
    /// Returns `None` without changing state when nothing is pending or the
    /// history is empty.
    #[inline]
    pub fn advance(&mut self, live: usize) -> Option<usize> {
        let index = self.peek(live)?;
        self.pending = index;
        Some(index)
    }

    /// Checks the cursor against its history's current shape.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] if more entries are pending than are live,
    /// or more are live than fit.
    pub fn check_invariants(&self, live: usize, capacity: usize) -> Result<(), InvariantError> {
        if live > capacity {
            return Err(InvariantError::new(format!(
                "live count {} exceeds capacity {}",
                live, capacity
            )));
        }
        if self.pending > live {
            return Err(InvariantError::new(format!(
                "cursor has {} pending entries but only {} are live",
                self.pending, live
            )));
        }
        Ok(())
    }
}
