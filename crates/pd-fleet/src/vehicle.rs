//! Per-vehicle dispatch state.

use pd_core::{Minute, VehicleId, ZoneId};

use crate::{FleetError, FleetResult};

/// A delivery vehicle.
///
/// Starts available, at `available_at = 0`.  Each committed assignment moves
/// it to the parcel's zone, uses up one unit of capacity, and marks it busy
/// until its ETA.  Capacity is never replenished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    id:           VehicleId,
    location:     ZoneId,
    capacity:     u32,
    available:    bool,
    available_at: Minute,
}

impl Vehicle {
    pub fn new(id: impl Into<VehicleId>, location: ZoneId, capacity: u32) -> Self {
        Self {
            id: id.into(),
            location,
            capacity,
            available:    true,
            available_at: Minute::ZERO,
        }
    }

    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    /// Zone the vehicle is at (or heading to, while busy).
    pub fn location(&self) -> ZoneId {
        self.location
    }

    /// Parcels it can still take.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn available_at(&self) -> Minute {
        self.available_at
    }

    /// Available, not exhausted, and free by `now`.
    #[inline]
    pub fn is_candidate(&self, now: Minute) -> bool {
        self.available && self.capacity > 0 && self.available_at <= now
    }

    /// Commit one delivery to `destination` arriving at `eta`.
    ///
    /// # Errors
    ///
    /// [`FleetError::NoCapacity`] if capacity is already zero; the vehicle is
    /// left untouched.
    pub fn commit(&mut self, destination: ZoneId, eta: Minute) -> FleetResult<()> {
        self.capacity = self
            .capacity
            .checked_sub(1)
            .ok_or_else(|| FleetError::NoCapacity(self.id.clone()))?;
        self.available    = false;
        self.location     = destination;
        self.available_at = eta;
        Ok(())
    }

    /// Mark the vehicle available again.
    pub fn release(&mut self) {
        self.available = true;
    }
}
