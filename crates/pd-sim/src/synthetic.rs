//! Seeded random scenarios for load runs and property tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pd_core::{Minute, Parcel, ZoneId};
use pd_fleet::Vehicle;
use pd_graph::Edge;

use crate::Scenario;

/// Shape of a generated scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticParams {
    pub zones:            usize,
    /// Random edges added on top of the spanning tree.
    pub extra_edges:      usize,
    pub max_edge_minutes: u32,
    pub vehicles:         usize,
    pub max_capacity:     u32,
    pub parcels:          usize,
    pub max_priority:     u32,
    /// Deadlines fall in `start + 10 ..= start + horizon`.
    pub start:            Minute,
    pub horizon:          u32,
}

impl Default for SyntheticParams {
    fn default() -> Self {
        Self {
            zones:            20,
            extra_edges:      20,
            max_edge_minutes: 30,
            vehicles:         8,
            max_capacity:     3,
            parcels:          50,
            max_priority:     5,
            start:            Minute(540),
            horizon:          240,
        }
    }
}

impl SyntheticParams {
    pub fn with_parcels(mut self, parcels: usize) -> Self {
        self.parcels = parcels;
        self
    }
}

/// Generate a scenario from `params`.  The same `seed` always yields the
/// same scenario.
///
/// The map is connected: zone `z > 0` gets an edge to a random earlier
/// zone before any extra edges are drawn.
pub fn generate(params: &SyntheticParams, seed: u64) -> Scenario {
    let mut rng = SmallRng::seed_from_u64(seed);
    let zones = params.zones.max(1) as u32;
    let max_minutes = params.max_edge_minutes.max(1);

    let mut edges = Vec::with_capacity(zones as usize - 1 + params.extra_edges);
    for z in 1..zones {
        let parent = rng.gen_range(0..z);
        edges.push(Edge::new(parent, z, rng.gen_range(1..=max_minutes)));
    }
    if zones > 1 {
        for _ in 0..params.extra_edges {
            let u = rng.gen_range(0..zones);
            let v = rng.gen_range(0..zones);
            if u != v {
                edges.push(Edge::new(u, v, rng.gen_range(1..=max_minutes)));
            }
        }
    }

    let vehicles = (0..params.vehicles)
        .map(|i| {
            let location = ZoneId(rng.gen_range(0..zones));
            let capacity = rng.gen_range(1..=params.max_capacity.max(1));
            Vehicle::new(format!("V{}", i + 1), location, capacity)
        })
        .collect();

    let horizon = params.horizon.max(10);
    let max_priority = params.max_priority.max(1);
    let parcels = (0..params.parcels)
        .filter_map(|i| {
            let destination = ZoneId(rng.gen_range(0..zones));
            let deadline = params.start.offset(rng.gen_range(10..=horizon));
            let order_time = Minute(params.start.0.saturating_sub(rng.gen_range(0..=120)));
            let priority = rng.gen_range(1..=max_priority);
            Parcel::new(format!("P{}", i + 1), destination, deadline, order_time, priority).ok()
        })
        .collect();

    Scenario { zone_count: zones as usize, edges, vehicles, parcels }
}
