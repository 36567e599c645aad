//! `ParcelQueue` — pending parcels ordered by urgency.
//!
//! # Ordering
//!
//! A max-heap on:
//!
//! 1. priority, higher first;
//! 2. order time, earlier first;
//! 3. insertion sequence, earlier first.
//!
//! The third key only matters for parcels identical in (1) and (2).  It makes
//! extraction order a pure function of the insertion order, so two runs over
//! the same input always pop the same sequence.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pd_core::{Admission, Parcel};

/// Heap entry: a parcel plus its insertion sequence number.
struct Ranked {
    parcel: Parcel,
    seq:    u64,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parcel
            .urgency_cmp(&other.parcel)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// Priority queue of pending parcels.
pub struct ParcelQueue {
    heap:     BinaryHeap<Ranked>,
    capacity: Option<usize>,
    next_seq: u64,
}

impl ParcelQueue {
    /// `capacity == None` means unbounded.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            heap: BinaryHeap::new(),
            capacity,
            next_seq: 0,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Add a parcel.  At capacity the parcel is dropped and
    /// [`Admission::Rejected`] is returned.
    pub fn insert(&mut self, parcel: Parcel) -> Admission {
        if self.is_full() {
            return Admission::Rejected;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Ranked { parcel, seq });
        Admission::Accepted
    }

    /// Remove and return the most urgent parcel, or `None` once empty.
    pub fn extract_max(&mut self) -> Option<Parcel> {
        self.heap.pop().map(|r| r.parcel)
    }

    /// The parcel [`extract_max`](Self::extract_max) would return next.
    pub fn peek(&self) -> Option<&Parcel> {
        self.heap.peek().map(|r| &r.parcel)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.heap.len() >= cap)
    }
}

impl Default for ParcelQueue {
    fn default() -> Self {
        Self::unbounded()
    }
}
