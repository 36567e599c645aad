//! The delivery request.

use std::cmp::Ordering;

use crate::{CoreError, CoreResult, Minute, ParcelId, ZoneId};

/// One delivery request.
///
/// Immutable once created: the dispatcher reads a parcel's fields but never
/// changes them.  Construct with [`Parcel::new`], which rejects a zero
/// priority.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    id:          ParcelId,
    destination: ZoneId,
    deadline:    Minute,
    order_time:  Minute,
    priority:    u32,
}

impl Parcel {
    /// Create a parcel.  `priority` must be at least 1; higher is more urgent.
    pub fn new(
        id:          impl Into<ParcelId>,
        destination: ZoneId,
        deadline:    Minute,
        order_time:  Minute,
        priority:    u32,
    ) -> CoreResult<Self> {
        let id = id.into();
        if priority == 0 {
            return Err(CoreError::InvalidPriority(id));
        }
        Ok(Self { id, destination, deadline, order_time, priority })
    }

    pub fn id(&self) -> &ParcelId {
        &self.id
    }

    /// Zone the parcel must be delivered to.
    pub fn destination(&self) -> ZoneId {
        self.destination
    }

    /// Latest acceptable delivery minute (inclusive).
    pub fn deadline(&self) -> Minute {
        self.deadline
    }

    /// Minute the order was placed.  Breaks ties between equal priorities.
    pub fn order_time(&self) -> Minute {
        self.order_time
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Dispatch urgency: `Greater` if `self` goes before `other`.  Higher
    /// priority first, then the earlier order.
    #[inline]
    pub fn urgency_cmp(&self, other: &Parcel) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.order_time.cmp(&self.order_time))
    }
}
