//! Reference model for differential-accessor tests.
//!
//! Tracks every live value with the sequence number it was inserted under
//! and remembers the sequence number of the next value the reader wants.
//! It shares no code with the crate's ring or cursor: pending values are
//! found by scanning, so the model is slow but obviously right.

#![allow(dead_code)]

use std::collections::VecDeque;

use histkit::traits::{DifferentialAccess, HistoryStore};

#[derive(Debug, Clone)]
pub struct ReferenceHistory<T> {
    capacity: usize,
    live: VecDeque<(u64, T)>, // oldest first
    next_seq: u64,
    next_unread: u64,
}

impl<T: Copy> ReferenceHistory<T> {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0);
        Self {
            capacity,
            live: VecDeque::new(),
            next_seq: 0,
            next_unread: 0,
        }
    }

    pub fn oldest_first(&self) -> Vec<T> {
        self.live.iter().map(|&(_, v)| v).collect()
    }

    pub fn unread(&self) -> Vec<T> {
        self.live
            .iter()
            .filter(|(seq, _)| *seq >= self.next_unread)
            .map(|&(_, v)| v)
            .collect()
    }
}

impl<T: Copy> HistoryStore<T> for ReferenceHistory<T> {
    fn insert(&mut self, value: T) -> Option<T> {
        self.live.push_back((self.next_seq, value));
        self.next_seq += 1;
        if self.live.len() > self.capacity {
            self.live.pop_front().map(|(_, v)| v)
        } else {
            None
        }
    }

    fn flush(&mut self) {
        self.live.clear();
        self.next_unread = self.next_seq;
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Copy> DifferentialAccess<T> for ReferenceHistory<T> {
    fn init_accessor(&mut self) {
        self.next_unread = match self.live.front() {
            Some(&(seq, _)) => seq,
            None => self.next_seq,
        };
    }

    fn fetch(&mut self) -> Option<T> {
        let &(seq, value) = self
            .live
            .iter()
            .find(|(seq, _)| *seq >= self.next_unread)?;
        self.next_unread = seq + 1;
        Some(value)
    }

    fn pending(&self) -> usize {
        self.live
            .iter()
            .filter(|(seq, _)| *seq >= self.next_unread)
            .count()
    }
}

/// One step of a producer/consumer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Insert(u16),
    Fetch,
    Init,
    Flush,
}

/// Observable result of one [`Op`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Inserted { evicted: Option<u16> },
    Fetched(Option<u16>),
    Reset,
}

/// Applies `op` through the trait seams and reports what the caller saw.
pub fn apply<H: DifferentialAccess<u16>>(history: &mut H, op: Op) -> Outcome {
    match op {
        Op::Insert(v) => Outcome::Inserted {
            evicted: history.insert(v),
        },
        Op::Fetch => Outcome::Fetched(history.fetch()),
        Op::Init => {
            history.init_accessor();
            Outcome::Reset
        },
        Op::Flush => {
            history.flush();
            Outcome::Reset
        },
    }
}
