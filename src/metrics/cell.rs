use std::cell::Cell;

/// A metrics-only counter that can be bumped through `&self`.
///
/// Used for read-only history operations (such as peeking at the next
/// pending value) that have no mutable access to their recorder. The
/// history types are single-threaded, so no synchronization is provided.
#[repr(transparent)]
#[derive(Debug, Default, Clone)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}
