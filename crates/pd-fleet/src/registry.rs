//! `VehicleRegistry` — open-addressing table of vehicles.
//!
//! # Layout
//!
//! A `Vec<Option<Vehicle>>` of fixed length.  A vehicle lives at the first
//! free slot at or after its home slot (wrapping), and its position is its
//! [`VehicleSlot`] handle for the rest of the run.  Lookup by id probes from
//! the home slot until it finds the id, an empty slot, or has walked the
//! whole table.
//!
//! # Growth
//!
//! A table built with [`VehicleRegistry::growable`] doubles before it gets
//! more than half full.  Growing rehashes every vehicle, so slot handles
//! taken before an insert may be stale after it.  The dispatcher only inserts
//! during setup, before any handle is stored.
//!
//! # Candidate order
//!
//! [`find_nearest_available`](VehicleRegistry::find_nearest_available) scans
//! in slot order and keeps the first vehicle at the minimum distance.  Which
//! vehicle wins a distance tie therefore depends on the hash function and
//! the table size.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use pd_core::{Minute, RegistryHash, VehicleId, VehicleSlot, ZoneId};
use pd_graph::{Router, ZoneGraph};

use crate::{FleetError, FleetResult, Vehicle};

const GROWABLE_INITIAL_SLOTS: usize = 16;

pub struct VehicleRegistry {
    table:    Vec<Option<Vehicle>>,
    len:      usize,
    hash:     RegistryHash,
    growable: bool,
}

impl VehicleRegistry {
    /// A table with exactly `slots` entries that never grows.
    pub fn new(slots: usize, hash: RegistryHash) -> Self {
        Self {
            table: vec![None; slots],
            len: 0,
            hash,
            growable: false,
        }
    }

    /// A table that doubles whenever an insert would take it past half full.
    pub fn growable(hash: RegistryHash) -> Self {
        Self {
            growable: true,
            ..Self::new(GROWABLE_INITIAL_SLOTS, hash)
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of registered vehicles.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Table size.
    pub fn slots(&self) -> usize {
        self.table.len()
    }

    // ── Insert / lookup ───────────────────────────────────────────────────

    /// Register `vehicle` and return its slot.
    ///
    /// # Errors
    ///
    /// - [`FleetError::DuplicateVehicle`] if the id is already present.
    /// - [`FleetError::RegistryFull`] if a fixed-size table has no free slot.
    pub fn insert(&mut self, vehicle: Vehicle) -> FleetResult<VehicleSlot> {
        if self.find(vehicle.id()).is_some() {
            return Err(FleetError::DuplicateVehicle(vehicle.id().clone()));
        }
        if self.growable && (self.len + 1) * 2 > self.table.len() {
            self.grow();
        }
        if self.len >= self.table.len() {
            return Err(FleetError::RegistryFull { slots: self.table.len() });
        }

        let n = self.table.len();
        let mut index = self.home_slot(vehicle.id());
        while self.table[index].is_some() {
            index = (index + 1) % n;
        }
        self.table[index] = Some(vehicle);
        self.len += 1;
        Ok(VehicleSlot(index as u32))
    }

    /// Slot of the vehicle with `id`, if registered.
    pub fn find(&self, id: &VehicleId) -> Option<VehicleSlot> {
        let n = self.table.len();
        if n == 0 {
            return None;
        }
        let start = self.home_slot(id);
        let mut index = start;
        while let Some(v) = &self.table[index] {
            if v.id() == id {
                return Some(VehicleSlot(index as u32));
            }
            index = (index + 1) % n;
            if index == start {
                break;
            }
        }
        None
    }

    /// The vehicle with `id`, if registered.
    pub fn find_vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.find(id).and_then(|slot| self.get(slot))
    }

    pub fn get(&self, slot: VehicleSlot) -> Option<&Vehicle> {
        self.table.get(slot.index())?.as_ref()
    }

    pub fn get_mut(&mut self, slot: VehicleSlot) -> Option<&mut Vehicle> {
        self.table.get_mut(slot.index())?.as_mut()
    }

    /// Occupied slots in table order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleSlot, &Vehicle)> + '_ {
        self.table
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (VehicleSlot(i as u32), v)))
    }

    // ── Dispatch query ────────────────────────────────────────────────────

    /// The closest vehicle that can reach `destination` by `deadline`.
    ///
    /// A vehicle qualifies if it [is a candidate](Vehicle::is_candidate) at
    /// `now`, `router` finds a path from its location, and
    /// `now + distance <= deadline`.  Among those, the smallest distance
    /// wins; ties go to the lower slot.
    pub fn find_nearest_available<R: Router>(
        &self,
        graph:       &ZoneGraph,
        router:      &R,
        destination: ZoneId,
        now:         Minute,
        deadline:    Minute,
    ) -> Option<VehicleSlot> {
        let mut nearest: Option<(u32, VehicleSlot)> = None;

        for (slot, vehicle) in self.iter() {
            if !vehicle.is_candidate(now) {
                continue;
            }
            let Some(distance) = router.shortest_time(graph, vehicle.location(), destination)
            else {
                continue;
            };
            if now + distance > deadline {
                continue;
            }
            if nearest.is_none_or(|(best, _)| distance < best) {
                nearest = Some((distance, slot));
            }
        }

        nearest.map(|(_, slot)| slot)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn home_slot(&self, id: &VehicleId) -> usize {
        home_slot(self.hash, id.as_str(), self.table.len())
    }

    fn grow(&mut self) {
        let new_slots = (self.table.len() * 2).max(GROWABLE_INITIAL_SLOTS);
        let old = std::mem::replace(&mut self.table, vec![None; new_slots]);
        for vehicle in old.into_iter().flatten() {
            let mut index = home_slot(self.hash, vehicle.id().as_str(), new_slots);
            while self.table[index].is_some() {
                index = (index + 1) % new_slots;
            }
            self.table[index] = Some(vehicle);
        }
    }
}

/// Home slot of `id` in a table of `slots` entries.
pub fn home_slot(hash: RegistryHash, id: &str, slots: usize) -> usize {
    if slots == 0 {
        return 0;
    }
    match hash {
        RegistryHash::Additive => {
            let sum: u64 = id.encode_utf16().map(u64::from).sum();
            (sum % slots as u64) as usize
        }
        RegistryHash::Fx => {
            let mut h = FxHasher::default();
            h.write(id.as_bytes());
            (h.finish() % slots as u64) as usize
        }
    }
}
