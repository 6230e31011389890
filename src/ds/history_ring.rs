//! Fixed-capacity history ring buffer.
//!
//! Stores the last `capacity` values in a ring buffer, providing O(1) push
//! (overwriting the oldest value when full) and O(1) access to any live value
//! by its age. Values are addressed newest-first: logical index `0` is the
//! most recently pushed value, `len() - 1` is the oldest.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                     HistoryRing<T> (capacity = 4) Layout                    │
//! │                                                                             │
//! │   Ring Buffer                                                               │
//! │   ────────────                                                              │
//! │                                                                             │
//! │   data: Vec<T> (grows to capacity once, then overwritten in place)          │
//! │   head: next physical write position (wraps around when full)               │
//! │                                                                             │
//! │   After pushing: 10, 20, 30, 40, 50                                         │
//! │                                                                             │
//! │   Physical:  0     1     2     3                                            │
//! │            ┌─────┬─────┬─────┬─────┐                                        │
//! │   data:    │ 50  │ 20  │ 30  │ 40  │                                        │
//! │            └─────┴─────┴─────┴─────┘                                        │
//! │                    ▲                                                        │
//! │                    │                                                        │
//! │                 head = 1 (next write goes here, evicting 20)                │
//! │                                                                             │
//! │   Logical Addressing (0 = newest)                                           │
//! │   ───────────────────────────────                                           │
//! │                                                                             │
//! │   get(i) = data[(head + capacity - 1 - i) % capacity]                       │
//! │                                                                             │
//! │   i=0 (newest):  data[(1 + 4 - 1 - 0) % 4] = data[0] = 50                   │
//! │   i=1:           data[(1 + 4 - 1 - 1) % 4] = data[3] = 40                   │
//! │   i=2:           data[(1 + 4 - 1 - 2) % 4] = data[2] = 30                   │
//! │   i=3 (oldest):  data[(1 + 4 - 1 - 3) % 4] = data[1] = 20                   │
//! │                                                                             │
//! │   Push Flow                                                                 │
//! │   ─────────                                                                 │
//! │                                                                             │
//! │   push(60):                                                                 │
//! │     1. evicted = replace(data[head], 60) → Some(20)                         │
//! │     2. head = (head + 1) % capacity     → head = 2                          │
//! │     3. len stays at capacity (already full)                                 │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shifting every live value one slot older on each push would give the same
//! logical view; the ring gives it without moving any value.
//!
//! ## Operations
//!
//! | Operation                  | Description                           | Complexity |
//! |----------------------------|---------------------------------------|------------|
//! | [`push`]                   | Add value (evicts oldest when full)   | O(1)       |
//! | [`get`]                    | Value at logical index (0 = newest)   | O(1)       |
//! | [`newest`] / [`oldest`]    | Ends of the live window               | O(1)       |
//! | [`clear`]                  | Drop all live values                  | O(1)       |
//! | [`iter`]                   | Iterate newest-first (reversible)     | O(n)       |
//! | [`to_vec_newest_first`]    | Collect newest-first                  | O(n)       |
//!
//! [`push`]: HistoryRing::push
//! [`get`]: HistoryRing::get
//! [`newest`]: HistoryRing::newest
//! [`oldest`]: HistoryRing::oldest
//! [`clear`]: HistoryRing::clear
//! [`iter`]: HistoryRing::iter
//! [`to_vec_newest_first`]: HistoryRing::to_vec_newest_first
//!
//! ## Example Usage
//!
//! ```
//! use histkit::ds::HistoryRing;
//!
//! let mut ring = HistoryRing::new(3);
//! ring.push(100u64);
//! ring.push(200);
//! ring.push(300);
//!
//! assert_eq!(ring.newest(), Some(300));
//! assert_eq!(ring.oldest(), Some(100));
//!
//! // Overwrites oldest when full and hands it back
//! assert_eq!(ring.push(400), Some(100));
//! assert_eq!(ring.to_vec_newest_first(), vec![400, 300, 200]);
//! ```
//!
//! ## Thread Safety
//!
//! `HistoryRing` is not thread-safe. It is owned by a
//! [`HistoryBucket`](crate::history::HistoryBucket), which is itself
//! single-threaded.
//!
//! ## Implementation Notes
//!
//! - Storage is allocated once at construction and never reallocated
//! - Zero-capacity rings are a no-op: every push is dropped
//! - `debug_validate_invariants()` available in debug/test builds

use std::fmt;
use std::iter::FusedIterator;

use crate::error::InvariantError;

/// Fixed-capacity ring of the most recent values, addressed newest-first.
///
/// Equality and hashing compare the live values in logical order, not the
/// raw backing storage.
///
/// # Example
///
/// ```
/// use histkit::ds::HistoryRing;
///
/// let mut ring = HistoryRing::new(3);
/// ring.push(10u16);
/// ring.push(20);
///
/// assert_eq!(ring.len(), 2);
/// assert_eq!(ring.get(0), Some(20));
/// assert_eq!(ring.get(1), Some(10));
/// assert_eq!(ring.get(2), None);
/// ```
#[derive(Clone)]
pub struct HistoryRing<T> {
    data: Vec<T>,
    head: usize,
    capacity: usize,
}

impl<T: Copy> HistoryRing<T> {
    /// Creates an empty ring that retains at most `capacity` values.
    ///
    /// # Example
    ///
    /// ```
    /// use histkit::ds::HistoryRing;
    ///
    /// let ring = HistoryRing::<u64>::new(4);
    /// assert!(ring.is_empty());
    /// assert_eq!(ring.capacity(), 4);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    /// Returns the maximum number of values retained.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of live values (<= `capacity`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the ring holds no live values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if the next push will evict the oldest value.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.data.len() == self.capacity
    }

    /// Pushes a value as the newest entry.
    ///
    /// Returns the evicted oldest value if the ring was already full.
    ///
    /// # Example
    ///
    /// ```
    /// use histkit::ds::HistoryRing;
    ///
    /// let mut ring = HistoryRing::new(2);
    /// assert_eq!(ring.push(10u32), None);
    /// assert_eq!(ring.push(20), None);
    /// assert_eq!(ring.push(30), Some(10));
    /// assert_eq!(ring.to_vec_newest_first(), vec![30, 20]);
    /// ```
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return None;
        }
        // Until the first wrap `head == data.len()`, so growth appends.
        let evicted = if self.data.len() < self.capacity {
            self.data.push(value);
            None
        } else {
            Some(std::mem::replace(&mut self.data[self.head], value))
        };
        self.head = (self.head + 1) % self.capacity;
        evicted
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.head + self.capacity - 1 - index) % self.capacity
    }

    /// Returns the value at logical `index` (`0` = newest).
    ///
    /// Returns `None` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }
        Some(self.data[self.physical(index)])
    }

    /// Returns the most recently pushed value.
    #[inline]
    pub fn newest(&self) -> Option<T> {
        self.get(0)
    }

    /// Returns the oldest live value.
    #[inline]
    pub fn oldest(&self) -> Option<T> {
        self.data.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Drops every live value. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.data.clear();
        self.head = 0;
    }

    /// Returns an iterator over live values, newest first.
    ///
    /// The iterator is double-ended: `iter().rev()` walks oldest first.
    ///
    /// # Example
    ///
    /// ```
    /// use histkit::ds::HistoryRing;
    ///
    /// let mut ring = HistoryRing::new(4);
    /// for v in [1u8, 2, 3] {
    ///     ring.push(v);
    /// }
    ///
    /// assert_eq!(ring.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// assert_eq!(ring.iter().rev().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            front: 0,
            back: self.data.len(),
        }
    }

    /// Returns live values from newest to oldest.
    pub fn to_vec_newest_first(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Returns live values from oldest to newest.
    pub fn to_vec_oldest_first(&self) -> Vec<T> {
        self.iter().rev().collect()
    }

    /// Returns an approximate memory footprint in bytes.
    ///
    /// Constant after construction: storage is reserved up front.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.data.capacity() * std::mem::size_of::<T>()
    }

    /// Checks the ring's internal bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] if the live length exceeds capacity or the
    /// write head does not follow the live window.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.data.len();
        if len > self.capacity {
            return Err(InvariantError::new(format!(
                "ring holds {} values but capacity is {}",
                len, self.capacity
            )));
        }
        if self.capacity == 0 {
            if self.head != 0 {
                return Err(InvariantError::new("zero-capacity ring has a moved head"));
            }
            return Ok(());
        }
        if self.head >= self.capacity {
            return Err(InvariantError::new(format!(
                "ring head {} out of range for capacity {}",
                self.head, self.capacity
            )));
        }
        if len < self.capacity && self.head != len {
            return Err(InvariantError::new(format!(
                "partially filled ring has head {} but length {}",
                self.head, len
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for HistoryRing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryRing")
            .field("capacity", &self.capacity)
            .field("newest_first", &self.to_vec_newest_first())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// PartialEq, Eq, Hash: compare logical content, not the raw backing array
// ---------------------------------------------------------------------------

impl<T: Copy + PartialEq> PartialEq for HistoryRing<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl<T: Copy + Eq> Eq for HistoryRing<T> {}

impl<T: Copy + std::hash::Hash> std::hash::Hash for HistoryRing<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.capacity.hash(state);
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// ---------------------------------------------------------------------------
// Iterator
// ---------------------------------------------------------------------------

/// Borrowed iterator over a [`HistoryRing`], newest first.
///
/// Created by [`HistoryRing::iter`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    ring: &'a HistoryRing<T>,
    front: usize, // next logical index from the newest end
    back: usize,  // one past the next logical index from the oldest end
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.ring.get(self.front)?;
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Copy> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.ring.get(self.back)
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}

impl<T: Copy> FusedIterator for Iter<'_, T> {}

impl<'a, T: Copy> IntoIterator for &'a HistoryRing<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_tracks_last_capacity_values() {
        let mut ring = HistoryRing::new(3);
        ring.push(10u64);
        ring.push(20);
        ring.push(30);
        assert_eq!(ring.to_vec_newest_first(), vec![30, 20, 10]);

        assert_eq!(ring.push(40), Some(10));
        assert_eq!(ring.to_vec_newest_first(), vec![40, 30, 20]);
        assert_eq!(ring.get(2), Some(20));
    }

    #[test]
    fn ring_empty_returns_none() {
        let ring = HistoryRing::<u64>::new(4);
        assert!(ring.is_empty());
        assert!(!ring.is_full());
        assert_eq!(ring.newest(), None);
        assert_eq!(ring.oldest(), None);
        assert_eq!(ring.get(0), None);
        assert_eq!(ring.to_vec_newest_first(), Vec::<u64>::new());
    }

    #[test]
    fn ring_get_bounds() {
        let mut ring = HistoryRing::new(3);
        ring.push(10u8);
        ring.push(20);
        assert_eq!(ring.get(0), Some(20));
        assert_eq!(ring.get(1), Some(10));
        assert_eq!(ring.get(2), None);
        assert_eq!(ring.get(usize::MAX), None);
    }

    #[test]
    fn ring_preserves_order_after_multiple_wraps() {
        let mut ring = HistoryRing::new(3);
        for v in 1..=10u32 {
            ring.push(v);
            ring.debug_validate_invariants();
        }
        assert!(ring.is_full());
        assert_eq!(ring.to_vec_newest_first(), vec![10, 9, 8]);
        assert_eq!(ring.to_vec_oldest_first(), vec![8, 9, 10]);
        assert_eq!(ring.newest(), Some(10));
        assert_eq!(ring.oldest(), Some(8));
    }

    #[test]
    fn ring_capacity_one_keeps_only_newest() {
        let mut ring = HistoryRing::new(1);
        assert_eq!(ring.push(1u16), None);
        assert_eq!(ring.push(2), Some(1));
        assert_eq!(ring.push(3), Some(2));
        assert_eq!(ring.to_vec_newest_first(), vec![3]);
        ring.debug_validate_invariants();
    }

    #[test]
    fn ring_zero_capacity_is_noop() {
        let mut ring = HistoryRing::new(0);
        assert_eq!(ring.push(5u64), None);
        assert!(ring.is_empty());
        assert!(!ring.is_full());
        assert_eq!(ring.iter().count(), 0);
        ring.debug_validate_invariants();
    }

    #[test]
    fn ring_clear_then_reuse() {
        let mut ring = HistoryRing::new(3);
        for v in 1..=5u64 {
            ring.push(v);
        }
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.capacity(), 3);
        ring.debug_validate_invariants();

        ring.push(42);
        assert_eq!(ring.to_vec_newest_first(), vec![42]);
        ring.debug_validate_invariants();
    }

    #[test]
    fn ring_storage_not_reallocated() {
        let mut ring = HistoryRing::new(16);
        let before = ring.approx_bytes();
        for v in 0..100u64 {
            ring.push(v);
        }
        assert_eq!(ring.approx_bytes(), before);
    }

    // -----------------------------------------------------------------------
    // iter() tests
    // -----------------------------------------------------------------------

    #[test]
    fn iter_exact_size_from_both_ends() {
        let mut ring = HistoryRing::new(4);
        for v in [1u8, 2, 3, 4, 5] {
            ring.push(v);
        }
        let mut it = ring.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(5));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next(), Some(4));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn ref_into_iter_for_loop() {
        let mut ring = HistoryRing::new(3);
        ring.push(10u64);
        ring.push(20);

        let mut sum = 0;
        for v in &ring {
            sum += v;
        }
        assert_eq!(sum, 30);
        assert_eq!(ring.len(), 2);
    }

    // -----------------------------------------------------------------------
    // PartialEq / Hash tests
    // -----------------------------------------------------------------------

    #[test]
    fn eq_different_head_same_logical_content() {
        let mut a = HistoryRing::new(3);
        a.push(1u64);
        a.push(2);
        a.push(3);

        let mut b = HistoryRing::new(3);
        b.push(99);
        b.push(1);
        b.push(2);
        b.push(3);

        assert_eq!(a, b);
    }

    #[test]
    fn ne_different_capacity() {
        let mut a = HistoryRing::new(3);
        a.push(1u64);
        let mut b = HistoryRing::new(4);
        b.push(1u64);
        assert_ne!(a, b);
    }

    #[test]
    fn hash_equal_rings_same_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut a = HistoryRing::new(3);
        a.push(10u64);
        a.push(20);
        a.push(30);

        let mut b = HistoryRing::new(3);
        b.push(99);
        b.push(10);
        b.push(20);
        b.push(30);

        let hash_of = |r: &HistoryRing<u64>| {
            let mut s = DefaultHasher::new();
            r.hash(&mut s);
            s.finish()
        };

        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn debug_lists_newest_first() {
        let mut ring = HistoryRing::new(2);
        ring.push(1u8);
        ring.push(2);
        let dbg = format!("{:?}", ring);
        assert!(dbg.contains("[2, 1]"));
    }

    #[test]
    fn check_invariants_accepts_fresh_ring() {
        assert!(HistoryRing::<u64>::new(5).check_invariants().is_ok());
    }
}
