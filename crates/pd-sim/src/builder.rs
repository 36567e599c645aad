//! Builder for constructing a [`Dispatcher`].

use log::warn;

use pd_core::{Admission, DispatchClock, DispatchConfig, Minute, Parcel, ZoneId};
use pd_fleet::{Vehicle, VehicleRegistry};
use pd_graph::{Edge, Router, ZoneGraph};
use pd_queue::{AvailabilityScheduler, ParcelQueue};

use crate::{DecisionLog, Dispatcher, Scenario, SimError, SimResult};

/// Builder for [`Dispatcher<R>`].
///
/// Setup is incremental: edges, vehicles and parcels are validated as they
/// are added, so a bad row is reported against its own id.  Every zone a
/// vehicle or parcel names must be below `zone_count`.
///
/// Capacities come from [`DispatchConfig`]:
///
/// | Field                | `None` means                          |
/// |----------------------|---------------------------------------|
/// | `queue_capacity`     | unbounded parcel queue                |
/// | `registry_slots`     | registry grows while vehicles are added |
/// | `scheduler_capacity` | unbounded availability scheduler      |
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = DispatcherBuilder::new(DispatchConfig::default(), 4, DijkstraRouter)?;
/// builder.add_edge(ZoneId(0), ZoneId(1), 10)?;
/// builder.add_vehicle("V1", ZoneId(0), 2)?;
/// let _ = builder.add_parcel("P1", ZoneId(1), Minute(600), Minute(100), 1)?;
/// let mut dispatcher = builder.build();
/// let summary = dispatcher.run(&mut NoopObserver)?;
/// ```
pub struct DispatcherBuilder<R: Router> {
    config:   DispatchConfig,
    graph:    ZoneGraph,
    router:   R,
    parcels:  ParcelQueue,
    vehicles: VehicleRegistry,
}

impl<R: Router> DispatcherBuilder<R> {
    /// Validate `config` and create an empty setup over `zone_count` zones.
    ///
    /// Fails if `zone_count` exceeds [`pd_graph::MAX_ZONES`].
    pub fn new(config: DispatchConfig, zone_count: usize, router: R) -> SimResult<Self> {
        config.validate()?;
        let graph = ZoneGraph::try_new(zone_count)?;
        let vehicles = match config.registry_slots {
            Some(slots) => VehicleRegistry::new(slots, config.registry_hash),
            None        => VehicleRegistry::growable(config.registry_hash),
        };
        Ok(Self {
            parcels: ParcelQueue::new(config.queue_capacity),
            graph,
            vehicles,
            router,
            config,
        })
    }

    /// Load every edge, vehicle and parcel of `scenario`.
    ///
    /// Parcels the queue turns away are logged and skipped, as with
    /// [`add_parcel`](Self::add_parcel).
    pub fn from_scenario(scenario: &Scenario, config: DispatchConfig, router: R) -> SimResult<Self> {
        let mut builder = Self::new(config, scenario.zone_count, router)?;
        for edge in &scenario.edges {
            builder.push_edge(*edge)?;
        }
        for vehicle in &scenario.vehicles {
            builder.push_vehicle(vehicle.clone())?;
        }
        for parcel in &scenario.parcels {
            let _ = builder.push_parcel(parcel.clone())?;
        }
        Ok(builder)
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn zone_count(&self) -> usize {
        self.graph.zone_count()
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Set the symmetric travel time between `u` and `v`.  A weight of 0
    /// removes the edge.
    pub fn add_edge(&mut self, u: ZoneId, v: ZoneId, minutes: u32) -> SimResult<()> {
        self.graph.add_edge(u, v, minutes)?;
        Ok(())
    }

    pub fn push_edge(&mut self, edge: Edge) -> SimResult<()> {
        self.add_edge(edge.from, edge.to, edge.minutes)
    }

    // ── Vehicles ──────────────────────────────────────────────────────────

    /// Register a vehicle, available from time zero.
    pub fn add_vehicle(&mut self, id: &str, location: ZoneId, capacity: u32) -> SimResult<()> {
        self.push_vehicle(Vehicle::new(id, location, capacity))
    }

    pub fn push_vehicle(&mut self, vehicle: Vehicle) -> SimResult<()> {
        self.check_zone("vehicle", vehicle.id().as_str(), vehicle.location())?;
        self.vehicles.insert(vehicle)?;
        Ok(())
    }

    // ── Parcels ───────────────────────────────────────────────────────────

    /// Queue a parcel for dispatch.
    ///
    /// Invalid input (unknown zone, zero priority) is an error.  A full
    /// queue is not: the parcel is dropped with a warning and
    /// [`Admission::Rejected`] is returned.
    pub fn add_parcel(
        &mut self,
        id:          &str,
        destination: ZoneId,
        deadline:    Minute,
        order_time:  Minute,
        priority:    u32,
    ) -> SimResult<Admission> {
        let parcel = Parcel::new(id, destination, deadline, order_time, priority)?;
        self.push_parcel(parcel)
    }

    pub fn push_parcel(&mut self, parcel: Parcel) -> SimResult<Admission> {
        self.check_zone("parcel", parcel.id().as_str(), parcel.destination())?;
        let id = parcel.id().clone();
        let admission = self.parcels.insert(parcel);
        if admission.is_rejected() {
            warn!(
                "parcel queue full ({} pending); dropping parcel {id}",
                self.parcels.len()
            );
        }
        Ok(admission)
    }

    // ── Build ─────────────────────────────────────────────────────────────

    /// Return a ready-to-run [`Dispatcher`] with its clock at `config.start`.
    pub fn build(self) -> Dispatcher<R> {
        let config = self.config;
        Dispatcher {
            clock:     DispatchClock::new(config.start),
            scheduler: AvailabilityScheduler::new(config.scheduler_capacity, config.scheduler_order),
            log:       DecisionLog::new(config.decision_capacity, config.failure_capacity),
            graph:     self.graph,
            router:    self.router,
            parcels:   self.parcels,
            vehicles:  self.vehicles,
            iterations: 0,
            stranded:  0,
            config,
        }
    }

    fn check_zone(&self, what: &'static str, id: &str, zone: ZoneId) -> SimResult<()> {
        if self.graph.contains(zone) {
            return Ok(());
        }
        Err(SimError::UnknownZone {
            what,
            id: id.to_owned(),
            zone,
            zone_count: self.graph.zone_count(),
        })
    }
}
