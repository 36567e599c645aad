//! `AvailabilityScheduler` — pending "vehicle is free again" events.
//!
//! # Why two orders
//!
//! The dispatcher only ever looks at the front event and releases it once
//! its time has come.  With [`SchedulerOrder::TimeOrdered`] the front is the
//! earliest event, which is always right.  [`SchedulerOrder::Fifo`] hands
//! events back in insertion order instead; that is only correct while every
//! event is enqueued no earlier than the one before it.  The dispatch loop
//! happens to guarantee this (the clock jumps to each ETA before the next
//! assignment), so both orders give identical runs today.  `Fifo` is kept
//! for comparison runs against the fixed-buffer configuration.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use pd_core::{Admission, Minute, SchedulerOrder, VehicleSlot};

/// A vehicle becoming available again at `time`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AvailabilityEvent {
    pub time:    Minute,
    pub vehicle: VehicleSlot,
}

enum Pending {
    Fifo(VecDeque<AvailabilityEvent>),
    /// `(time, insertion seq, vehicle)` under `Reverse` for a min-heap.
    TimeOrdered(BinaryHeap<Reverse<(Minute, u64, VehicleSlot)>>),
}

/// Bounded (or unbounded) queue of availability events.
pub struct AvailabilityScheduler {
    pending:  Pending,
    capacity: Option<usize>,
    next_seq: u64,
}

impl AvailabilityScheduler {
    pub fn new(capacity: Option<usize>, order: SchedulerOrder) -> Self {
        let pending = match order {
            SchedulerOrder::Fifo        => Pending::Fifo(VecDeque::new()),
            SchedulerOrder::TimeOrdered => Pending::TimeOrdered(BinaryHeap::new()),
        };
        Self { pending, capacity, next_seq: 0 }
    }

    pub fn order(&self) -> SchedulerOrder {
        match self.pending {
            Pending::Fifo(_)        => SchedulerOrder::Fifo,
            Pending::TimeOrdered(_) => SchedulerOrder::TimeOrdered,
        }
    }

    /// Schedule `vehicle` to become available at `time`.  At capacity the
    /// event is dropped and [`Admission::Rejected`] is returned.
    pub fn enqueue(&mut self, time: Minute, vehicle: VehicleSlot) -> Admission {
        if self.capacity.is_some_and(|cap| self.len() >= cap) {
            return Admission::Rejected;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        match &mut self.pending {
            Pending::Fifo(q)        => q.push_back(AvailabilityEvent { time, vehicle }),
            Pending::TimeOrdered(h) => h.push(Reverse((time, seq, vehicle))),
        }
        Admission::Accepted
    }

    /// The front event, without removing it.
    pub fn peek(&self) -> Option<AvailabilityEvent> {
        match &self.pending {
            Pending::Fifo(q) => q.front().copied(),
            Pending::TimeOrdered(h) => h
                .peek()
                .map(|&Reverse((time, _, vehicle))| AvailabilityEvent { time, vehicle }),
        }
    }

    /// Remove and return the front event regardless of its time.
    pub fn dequeue(&mut self) -> Option<AvailabilityEvent> {
        match &mut self.pending {
            Pending::Fifo(q) => q.pop_front(),
            Pending::TimeOrdered(h) => h
                .pop()
                .map(|Reverse((time, _, vehicle))| AvailabilityEvent { time, vehicle }),
        }
    }

    /// Remove and return the front event only if its time is `<= now`.
    pub fn pop_due(&mut self, now: Minute) -> Option<AvailabilityEvent> {
        match self.peek() {
            Some(ev) if ev.time <= now => self.dequeue(),
            _ => None,
        }
    }

    /// Time of the front event.
    pub fn next_time(&self) -> Option<Minute> {
        self.peek().map(|ev| ev.time)
    }

    pub fn len(&self) -> usize {
        match &self.pending {
            Pending::Fifo(q)        => q.len(),
            Pending::TimeOrdered(h) => h.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

impl Default for AvailabilityScheduler {
    fn default() -> Self {
        Self::new(None, SchedulerOrder::default())
    }
}
