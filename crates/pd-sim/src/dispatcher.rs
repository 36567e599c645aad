//! The `Dispatcher` struct and its event loop.

use log::{debug, info, warn};

use pd_core::{DispatchClock, DispatchConfig, Minute, Parcel};
use pd_fleet::VehicleRegistry;
use pd_graph::{Router, ZoneGraph};
use pd_queue::{AvailabilityScheduler, ParcelQueue};

use crate::{
    Assignment, Decision, DecisionLog, DispatchObserver, FailedDelivery, FailureReason, SimError,
    SimResult,
};

/// Outcome of one [`Dispatcher::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// An iteration ran; there may be more work.
    Progressed,
    /// Nothing pending; the run is over.
    Finished,
}

/// Totals for a completed (or partially stepped) run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub start:             Minute,
    /// Clock value at the end of the run.
    pub end:               Minute,
    pub iterations:        u64,
    pub assigned:          usize,
    pub failed:            usize,
    pub released:          usize,
    pub dropped_decisions: usize,
    pub dropped_failures:  usize,
    /// Vehicles left busy because the scheduler had no room for their
    /// availability event.
    pub stranded:          usize,
}

/// The dispatch engine.  Owns the clock, the zone graph, the parcel queue,
/// the vehicle registry, the availability scheduler and the decision log.
///
/// Create via [`DispatcherBuilder`][crate::DispatcherBuilder].
///
/// # Loop
///
/// Each iteration:
///
/// 1. Release every vehicle whose availability time is at or before the
///    clock.
/// 2. If a parcel is pending, take the highest-ranked one and either
///    assign it to the nearest feasible vehicle (clock moves to the ETA) or
///    record it as failed.
/// 3. Otherwise move the clock to the next availability event.
///
/// The run ends when no parcels and no availability events remain.
pub struct Dispatcher<R: Router> {
    pub(crate) config:     DispatchConfig,
    pub(crate) clock:      DispatchClock,
    pub(crate) graph:      ZoneGraph,
    pub(crate) router:     R,
    pub(crate) parcels:    ParcelQueue,
    pub(crate) vehicles:   VehicleRegistry,
    pub(crate) scheduler:  AvailabilityScheduler,
    pub(crate) log:        DecisionLog,
    pub(crate) iterations: u64,
    pub(crate) stranded:   usize,
}

impl<R: Router> Dispatcher<R> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn clock(&self) -> &DispatchClock {
        &self.clock
    }

    pub fn now(&self) -> Minute {
        self.clock.now
    }

    pub fn graph(&self) -> &ZoneGraph {
        &self.graph
    }

    pub fn vehicles(&self) -> &VehicleRegistry {
        &self.vehicles
    }

    pub fn parcels(&self) -> &ParcelQueue {
        &self.parcels
    }

    pub fn scheduler(&self) -> &AvailabilityScheduler {
        &self.scheduler
    }

    pub fn log(&self) -> &DecisionLog {
        &self.log
    }

    pub fn is_finished(&self) -> bool {
        self.parcels.is_empty() && self.scheduler.is_empty()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            start:             self.clock.start,
            end:               self.clock.now,
            iterations:        self.iterations,
            assigned:          self.log.assigned_total(),
            failed:            self.log.failed_total(),
            released:          self.log.released_total(),
            dropped_decisions: self.log.dropped_decisions(),
            dropped_failures:  self.log.dropped_failures(),
            stranded:          self.stranded,
        }
    }

    // ── Loop ──────────────────────────────────────────────────────────────

    /// Run to completion.
    pub fn run<O: DispatchObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        info!(
            "dispatch starting at {}: {} parcels, {} vehicles, {} zones, {} edges",
            self.clock,
            self.parcels.len(),
            self.vehicles.len(),
            self.graph.zone_count(),
            self.graph.edge_count()
        );
        observer.on_run_start(self.clock.now);

        while self.step(observer)? == Step::Progressed {}

        let summary = self.summary();
        observer.on_run_end(&summary);
        info!(
            "dispatch finished at {} after {} iterations ({} min simulated): {} assigned, {} failed",
            self.clock,
            summary.iterations,
            self.clock.elapsed(),
            summary.assigned,
            summary.failed
        );
        Ok(summary)
    }

    /// Run one iteration of the loop.
    pub fn step<O: DispatchObserver>(&mut self, observer: &mut O) -> SimResult<Step> {
        if self.is_finished() {
            return Ok(Step::Finished);
        }
        self.iterations += 1;

        self.release_due(observer)?;

        if let Some(parcel) = self.parcels.extract_max() {
            self.dispatch(parcel, observer)?;
        } else if let Some(next) = self.scheduler.next_time() {
            self.clock.advance_to(next);
        }

        observer.on_iteration_end(self.clock.now, self.parcels.len(), self.scheduler.len());
        Ok(Step::Progressed)
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn release_due<O: DispatchObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while let Some(event) = self.scheduler.pop_due(self.clock.now) {
            let vehicle = self
                .vehicles
                .get_mut(event.vehicle)
                .ok_or(SimError::EmptySlot(event.vehicle))?;
            vehicle.release();
            let decision = Decision::VehicleAvailable {
                time:    self.clock.now,
                vehicle: vehicle.id().clone(),
            };
            self.record(decision, observer);
        }
        Ok(())
    }

    fn dispatch<O: DispatchObserver>(&mut self, parcel: Parcel, observer: &mut O) -> SimResult<()> {
        let now = self.clock.now;
        let destination = parcel.destination();
        let deadline = parcel.deadline();

        let Some(slot) = self.vehicles.find_nearest_available(
            &self.graph,
            &self.router,
            destination,
            now,
            deadline,
        ) else {
            self.fail(parcel, FailureReason::NoSuitableVehicle, observer);
            return Ok(());
        };

        let vehicle = self.vehicles.get_mut(slot).ok_or(SimError::EmptySlot(slot))?;
        let Some(travel) = self.router.shortest_time(&self.graph, vehicle.location(), destination)
        else {
            self.fail(parcel, FailureReason::NoSuitableVehicle, observer);
            return Ok(());
        };
        let eta = now + travel;
        if eta > deadline {
            self.fail(parcel, FailureReason::DeadlineExceeded { eta, deadline }, observer);
            return Ok(());
        }

        vehicle.commit(destination, eta)?;
        let vehicle_id = vehicle.id().clone();

        if self.scheduler.enqueue(eta, slot).is_rejected() {
            warn!(
                "availability scheduler full; vehicle {vehicle_id} stays busy after delivering {}",
                parcel.id()
            );
            self.stranded += 1;
        }

        let assignment = Assignment {
            time: now,
            parcel: parcel.id().clone(),
            vehicle: vehicle_id,
            destination,
            eta,
            deadline,
        };
        self.record(Decision::Assigned(assignment), observer);
        self.clock.advance_to(eta);
        Ok(())
    }

    fn fail<O: DispatchObserver>(&mut self, parcel: Parcel, reason: FailureReason, observer: &mut O) {
        let decision = Decision::Failed {
            time: self.clock.now,
            parcel: parcel.id().clone(),
            reason,
        };
        self.record(decision, observer);
        if !self.log.record_failure(FailedDelivery { parcel, reason }) {
            warn!("failure log full; dropping failure record");
        }
    }

    fn record<O: DispatchObserver>(&mut self, decision: Decision, observer: &mut O) {
        debug!("{decision}");
        observer.on_decision(&decision);
        self.log.record(decision);
    }
}
