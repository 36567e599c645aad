//! Scenario inputs: the zone map, fleet and parcels for one run.

use std::path::Path;

use pd_core::{Minute, Parcel, ZoneId};
use pd_fleet::{Vehicle, load_vehicles_csv};
use pd_graph::{Edge, load_edges_csv};
use pd_queue::load_parcels_csv;

use crate::SimResult;

/// Everything a [`DispatcherBuilder`][crate::DispatcherBuilder] needs
/// besides configuration and a router.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scenario {
    pub zone_count: usize,
    pub edges:      Vec<Edge>,
    pub vehicles:   Vec<Vehicle>,
    pub parcels:    Vec<Parcel>,
}

impl Scenario {
    /// The built-in four-zone demo: two vans, three parcels, day start 09:00.
    ///
    /// Edges in minutes: 0-1 10, 0-2 15, 1-2 5, 1-3 20, 2-3 10.
    pub fn sample() -> Self {
        let edges = vec![
            Edge::new(0, 1, 10),
            Edge::new(0, 2, 15),
            Edge::new(1, 2, 5),
            Edge::new(1, 3, 20),
            Edge::new(2, 3, 10),
        ];
        let vehicles = vec![
            Vehicle::new("V1", ZoneId(0), 2),
            Vehicle::new("V2", ZoneId(2), 1),
        ];
        // Priorities are constants >= 1, so construction cannot fail.
        let parcels = [
            ("P1", 3, 600, 100, 2),
            ("P2", 1, 720, 120, 1),
            ("P3", 3, 550, 110, 1),
        ]
        .into_iter()
        .filter_map(|(id, zone, deadline, order, priority)| {
            Parcel::new(id, ZoneId(zone), Minute(deadline), Minute(order), priority).ok()
        })
        .collect();

        Self { zone_count: 4, edges, vehicles, parcels }
    }

    /// Load edges, vehicles and parcels from three CSV files.
    ///
    /// When `zone_count` is `None` it is one more than the largest zone id
    /// any row mentions.
    pub fn load_csv(
        edges:      &Path,
        vehicles:   &Path,
        parcels:    &Path,
        zone_count: Option<usize>,
    ) -> SimResult<Self> {
        let mut scenario = Self {
            zone_count: 0,
            edges:      load_edges_csv(edges)?,
            vehicles:   load_vehicles_csv(vehicles)?,
            parcels:    load_parcels_csv(parcels)?,
        };
        scenario.zone_count = zone_count.unwrap_or_else(|| scenario.max_zone_mentioned() + 1);
        Ok(scenario)
    }

    /// Largest zone index referenced by any edge, vehicle or parcel (0 if
    /// there are none).
    pub fn max_zone_mentioned(&self) -> usize {
        let edge_zones = self.edges.iter().flat_map(|e| [e.from, e.to]);
        let vehicle_zones = self.vehicles.iter().map(Vehicle::location);
        let parcel_zones = self.parcels.iter().map(Parcel::destination);
        edge_zones
            .chain(vehicle_zones)
            .chain(parcel_zones)
            .map(ZoneId::index)
            .max()
            .unwrap_or(0)
    }
}
