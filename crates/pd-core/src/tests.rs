//! Unit tests for pd-core.

#[cfg(test)]
mod ids {
    use crate::{ParcelId, VehicleId, VehicleSlot, ZoneId};

    #[test]
    fn typed_id_index() {
        assert_eq!(ZoneId(3).index(), 3);
        assert_eq!(usize::from(VehicleSlot(7)), 7);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(ZoneId::default(), ZoneId::INVALID);
        assert_eq!(VehicleSlot::default(), VehicleSlot::INVALID);
    }

    #[test]
    fn try_from_usize() {
        assert_eq!(ZoneId::try_from(12usize).unwrap(), ZoneId(12));
        assert!(ZoneId::try_from(usize::MAX).is_err());
    }

    #[test]
    fn name_ids_display_verbatim() {
        assert_eq!(ParcelId::from("P1").to_string(), "P1");
        assert_eq!(VehicleId::new(String::from("V2")).as_str(), "V2");
    }

    #[test]
    fn name_ids_compare_by_value() {
        assert_eq!(VehicleId::from("V1"), VehicleId::new("V1"));
        assert_ne!(VehicleId::from("V1"), VehicleId::from("V10"));
    }
}

#[cfg(test)]
mod time {
    use crate::{DispatchClock, Minute};

    #[test]
    fn minute_arithmetic() {
        assert_eq!(Minute(540) + 25, Minute(565));
        assert_eq!(Minute(565) - Minute(540), 25);
        assert_eq!(Minute(10).since(Minute(20)), 0);
        assert_eq!(Minute(u32::MAX) + 1, Minute(u32::MAX));
    }

    #[test]
    fn minute_dhm() {
        assert_eq!(Minute(540).dhm(), (0, 9, 0));
        assert_eq!(Minute(1_440 + 61).dhm(), (1, 1, 1));
    }

    #[test]
    fn clock_starts_at_start() {
        let clock = DispatchClock::new(Minute(540));
        assert_eq!(clock.now, Minute(540));
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn clock_advances() {
        let mut clock = DispatchClock::new(Minute(540));
        clock.advance_to(Minute(550));
        clock.advance_to(Minute(550));
        assert_eq!(clock.now, Minute(550));
        assert_eq!(clock.elapsed(), 10);
    }

    #[test]
    fn clock_display() {
        let clock = DispatchClock::new(Minute(545));
        assert_eq!(clock.to_string(), "545 (day 0 09:05)");
    }
}

#[cfg(test)]
mod parcel {
    use std::cmp::Ordering;

    use crate::{CoreError, Minute, Parcel, ZoneId};

    fn parcel(id: &str, priority: u32, order: u32) -> Parcel {
        Parcel::new(id, ZoneId(0), Minute(600), Minute(order), priority).unwrap()
    }

    #[test]
    fn zero_priority_rejected() {
        let err = Parcel::new("P0", ZoneId(1), Minute(600), Minute(100), 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPriority(ref id) if id.as_str() == "P0"));
    }

    #[test]
    fn accessors() {
        let p = Parcel::new("P1", ZoneId(3), Minute(600), Minute(100), 2).unwrap();
        assert_eq!(p.id().as_str(), "P1");
        assert_eq!(p.destination(), ZoneId(3));
        assert_eq!(p.deadline(), Minute(600));
        assert_eq!(p.order_time(), Minute(100));
        assert_eq!(p.priority(), 2);
    }

    #[test]
    fn higher_priority_is_more_urgent() {
        let high = parcel("a", 2, 200);
        let low = parcel("b", 1, 100);
        assert_eq!(high.urgency_cmp(&low), Ordering::Greater);
        assert_eq!(low.urgency_cmp(&high), Ordering::Less);
    }

    #[test]
    fn earlier_order_breaks_ties() {
        let early = parcel("a", 1, 110);
        let late = parcel("b", 1, 120);
        assert_eq!(early.urgency_cmp(&late), Ordering::Greater);
        assert_eq!(late.urgency_cmp(&early), Ordering::Less);
    }

    #[test]
    fn exact_tie_is_equal() {
        let a = parcel("a", 1, 110);
        let b = parcel("b", 1, 110);
        assert_eq!(a.urgency_cmp(&b), Ordering::Equal);
        assert_eq!(b.urgency_cmp(&a), Ordering::Equal);
    }
}

#[cfg(test)]
mod config {
    use crate::{DispatchConfig, Minute, RegistryHash, SchedulerOrder};

    #[test]
    fn default_is_unbounded_time_ordered() {
        let c = DispatchConfig::default();
        assert_eq!(c.start, Minute(540));
        assert_eq!(c.queue_capacity, None);
        assert_eq!(c.scheduler_order, SchedulerOrder::TimeOrdered);
        assert_eq!(c.registry_hash, RegistryHash::Additive);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn legacy_matches_fixed_buffers() {
        let c = DispatchConfig::legacy();
        assert_eq!(c.queue_capacity, Some(10));
        assert_eq!(c.registry_slots, Some(10));
        assert_eq!(c.scheduler_capacity, Some(10));
        assert_eq!(c.failure_capacity, Some(10));
        assert_eq!(c.scheduler_order, SchedulerOrder::Fifo);
    }

    #[test]
    fn zero_slots_invalid() {
        let c = DispatchConfig { registry_slots: Some(0), ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_scheduler_capacity_invalid() {
        let c = DispatchConfig { scheduler_capacity: Some(0), ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn with_start_overrides() {
        let c = DispatchConfig::default().with_start(Minute(0));
        assert_eq!(c.start, Minute(0));
    }
}

#[cfg(test)]
mod admission {
    use crate::Admission;

    #[test]
    fn predicates() {
        assert!(Admission::Accepted.is_accepted());
        assert!(Admission::Rejected.is_rejected());
        assert!(!Admission::Rejected.is_accepted());
    }
}
