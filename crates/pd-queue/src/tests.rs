//! Unit tests for pd-queue.

use pd_core::{Minute, Parcel, ZoneId};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parcel(id: &str, priority: u32, order_time: u32) -> Parcel {
    Parcel::new(id, ZoneId(0), Minute(600), Minute(order_time), priority).unwrap()
}

// ── ParcelQueue ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod parcel_queue {
    use pd_core::Admission;

    use super::parcel;
    use crate::ParcelQueue;

    fn keys(q: &mut ParcelQueue) -> Vec<(u32, u32)> {
        std::iter::from_fn(|| q.extract_max())
            .map(|p| (p.priority(), p.order_time().0))
            .collect()
    }

    #[test]
    fn priority_then_order_time() {
        let mut q = ParcelQueue::unbounded();
        let _ = q.insert(parcel("a", 2, 100));
        let _ = q.insert(parcel("b", 1, 120));
        let _ = q.insert(parcel("c", 1, 110));
        assert_eq!(keys(&mut q), vec![(2, 100), (1, 110), (1, 120)]);
    }

    #[test]
    fn empty_returns_none_repeatedly() {
        let mut q = ParcelQueue::unbounded();
        assert!(q.extract_max().is_none());
        let _ = q.insert(parcel("a", 1, 0));
        assert!(q.extract_max().is_some());
        assert!(q.extract_max().is_none());
        assert!(q.extract_max().is_none());
    }

    #[test]
    fn exact_ties_pop_in_insertion_order() {
        let mut q = ParcelQueue::unbounded();
        for id in ["x", "y", "z"] {
            let _ = q.insert(parcel(id, 3, 50));
        }
        let ids: Vec<String> = std::iter::from_fn(|| q.extract_max())
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, ["x", "y", "z"]);
    }

    #[test]
    fn bounded_rejects_when_full() {
        let mut q = ParcelQueue::new(Some(2));
        assert_eq!(q.insert(parcel("a", 1, 0)), Admission::Accepted);
        assert_eq!(q.insert(parcel("b", 1, 1)), Admission::Accepted);
        assert!(q.is_full());
        // Even a more urgent parcel is turned away; nothing is evicted.
        assert_eq!(q.insert(parcel("c", 9, 0)), Admission::Rejected);
        assert_eq!(q.len(), 2);
        assert_eq!(q.peek().unwrap().id().as_str(), "a");
    }

    #[test]
    fn space_frees_after_extract() {
        let mut q = ParcelQueue::new(Some(1));
        let _ = q.insert(parcel("a", 1, 0));
        q.extract_max();
        assert_eq!(q.insert(parcel("b", 1, 0)), Admission::Accepted);
    }

    #[test]
    fn peek_matches_extract() {
        let mut q = ParcelQueue::unbounded();
        let _ = q.insert(parcel("low", 1, 0));
        let _ = q.insert(parcel("high", 5, 0));
        let peeked = q.peek().cloned();
        assert_eq!(peeked, q.extract_max());
    }

    #[test]
    fn len_tracks_contents() {
        let mut q = ParcelQueue::default();
        assert!(q.is_empty());
        let _ = q.insert(parcel("a", 1, 0));
        let _ = q.insert(parcel("b", 1, 0));
        assert_eq!(q.len(), 2);
        assert_eq!(q.capacity(), None);
    }
}

// ── Drain property ────────────────────────────────────────────────────────────

#[cfg(test)]
mod drain {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use super::parcel;
    use crate::ParcelQueue;

    proptest! {
        #[test]
        fn drains_every_parcel_once_in_order(
            specs in prop::collection::vec((1u32..5, 0u32..200), 0..40)
        ) {
            let mut q = ParcelQueue::unbounded();
            for (i, &(prio, order)) in specs.iter().enumerate() {
                let _ = q.insert(parcel(&format!("p{i}"), prio, order));
            }

            let drained: Vec<_> = std::iter::from_fn(|| q.extract_max()).collect();
            prop_assert_eq!(drained.len(), specs.len());

            let mut ids: Vec<_> = drained.iter().map(|p| p.id().to_string()).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), specs.len());

            for pair in drained.windows(2) {
                prop_assert_ne!(pair[1].urgency_cmp(&pair[0]), Ordering::Greater);
            }
            prop_assert!(q.extract_max().is_none());
        }
    }
}

// ── AvailabilityScheduler ─────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use pd_core::{Admission, Minute, SchedulerOrder, VehicleSlot};

    use crate::{AvailabilityEvent, AvailabilityScheduler};

    fn ev(time: u32, slot: u32) -> AvailabilityEvent {
        AvailabilityEvent { time: Minute(time), vehicle: VehicleSlot(slot) }
    }

    #[test]
    fn fifo_ignores_time() {
        let mut s = AvailabilityScheduler::new(None, SchedulerOrder::Fifo);
        let _ = s.enqueue(Minute(600), VehicleSlot(1));
        let _ = s.enqueue(Minute(550), VehicleSlot(2));
        assert_eq!(s.dequeue(), Some(ev(600, 1)));
        assert_eq!(s.dequeue(), Some(ev(550, 2)));
        assert_eq!(s.dequeue(), None);
    }

    #[test]
    fn time_ordered_pops_earliest() {
        let mut s = AvailabilityScheduler::new(None, SchedulerOrder::TimeOrdered);
        let _ = s.enqueue(Minute(600), VehicleSlot(1));
        let _ = s.enqueue(Minute(550), VehicleSlot(2));
        let _ = s.enqueue(Minute(550), VehicleSlot(0));
        assert_eq!(s.dequeue(), Some(ev(550, 2)));
        assert_eq!(s.dequeue(), Some(ev(550, 0)));
        assert_eq!(s.dequeue(), Some(ev(600, 1)));
    }

    #[test]
    fn orders_agree_on_non_decreasing_input() {
        let mut fifo = AvailabilityScheduler::new(None, SchedulerOrder::Fifo);
        let mut timed = AvailabilityScheduler::new(None, SchedulerOrder::TimeOrdered);
        for (t, v) in [(550, 3), (560, 1), (560, 0), (590, 2)] {
            let _ = fifo.enqueue(Minute(t), VehicleSlot(v));
            let _ = timed.enqueue(Minute(t), VehicleSlot(v));
        }
        let a: Vec<_> = std::iter::from_fn(|| fifo.dequeue()).collect();
        let b: Vec<_> = std::iter::from_fn(|| timed.dequeue()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn pop_due_respects_now() {
        let mut s = AvailabilityScheduler::default();
        let _ = s.enqueue(Minute(550), VehicleSlot(0));
        assert_eq!(s.pop_due(Minute(549)), None);
        assert_eq!(s.len(), 1);
        assert_eq!(s.pop_due(Minute(550)), Some(ev(550, 0)));
        assert!(s.is_empty());
    }

    #[test]
    fn fifo_pop_due_blocks_behind_late_front() {
        let mut s = AvailabilityScheduler::new(None, SchedulerOrder::Fifo);
        let _ = s.enqueue(Minute(600), VehicleSlot(1));
        let _ = s.enqueue(Minute(550), VehicleSlot(2));
        // The 550 event is due but sits behind the 600 one.
        assert_eq!(s.pop_due(Minute(560)), None);
        assert_eq!(s.next_time(), Some(Minute(600)));
    }

    #[test]
    fn bounded_rejects_when_full() {
        let mut s = AvailabilityScheduler::new(Some(1), SchedulerOrder::Fifo);
        assert_eq!(s.enqueue(Minute(1), VehicleSlot(0)), Admission::Accepted);
        assert_eq!(s.enqueue(Minute(2), VehicleSlot(1)), Admission::Rejected);
        assert_eq!(s.len(), 1);
        s.dequeue();
        assert_eq!(s.enqueue(Minute(3), VehicleSlot(1)), Admission::Accepted);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut s = AvailabilityScheduler::default();
        let _ = s.enqueue(Minute(5), VehicleSlot(4));
        assert_eq!(s.peek(), Some(ev(5, 4)));
        assert_eq!(s.len(), 1);
        assert_eq!(s.order(), SchedulerOrder::TimeOrdered);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use pd_core::{Minute, ZoneId};

    use crate::{load_parcels_reader, QueueError};

    #[test]
    fn loads_rows_in_file_order() {
        let csv = "\
id,destination,deadline,order_time,priority\n\
P1,3,600,100,2\n\
P2, 1, 720, 120, 1\n";
        let parcels = load_parcels_reader(Cursor::new(csv)).unwrap();
        assert_eq!(parcels.len(), 2);
        assert_eq!(parcels[0].id().as_str(), "P1");
        assert_eq!(parcels[0].destination(), ZoneId(3));
        assert_eq!(parcels[1].deadline(), Minute(720));
        assert_eq!(parcels[1].priority(), 1);
    }

    #[test]
    fn zero_priority_is_error() {
        let csv = "id,destination,deadline,order_time,priority\nP1,3,600,100,0\n";
        let err = load_parcels_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, QueueError::Core(_)));
    }

    #[test]
    fn missing_column_is_parse_error() {
        let csv = "id,destination,deadline\nP1,3,600\n";
        let err = load_parcels_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, QueueError::Parse(_)));
    }
}
