use std::iter::FusedIterator;

use crate::history::bucket::HistoryBucket;

/// Iterator that fetches pending values from a [`HistoryBucket`], oldest first.
///
/// Created by [`HistoryBucket::drain`]. Each `next` is one
/// [`fetch`](HistoryBucket::fetch); values not consumed before the iterator
/// is dropped remain pending.
pub struct Drain<'a, T: Copy> {
    bucket: &'a mut HistoryBucket<T>,
}

impl<'a, T: Copy> Drain<'a, T> {
    pub(crate) fn new(bucket: &'a mut HistoryBucket<T>) -> Self {
        Self { bucket }
    }
}

impl<T: Copy> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.bucket.has_pending() {
            return None;
        }
        self.bucket.fetch()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.bucket.has_pending() {
            self.bucket.pending()
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}

impl<T: Copy> ExactSizeIterator for Drain<'_, T> {}

// The bucket is borrowed exclusively, so nothing can become pending mid-iteration.
impl<T: Copy> FusedIterator for Drain<'_, T> {}
