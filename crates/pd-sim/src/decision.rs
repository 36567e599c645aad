//! Decision records and the run's decision log.

use std::fmt;

use pd_core::{Minute, Parcel, ParcelId, VehicleId, ZoneId};

// ── Records ───────────────────────────────────────────────────────────────────

/// Why a parcel could not be dispatched.  Both reasons are final: the
/// parcel is not retried.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// No vehicle passed the availability, capacity, reachability and
    /// deadline filter.
    NoSuitableVehicle,
    /// A vehicle passed the filter but the recomputed ETA missed the deadline.
    DeadlineExceeded { eta: Minute, deadline: Minute },
}

impl FailureReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::NoSuitableVehicle     => "no_suitable_vehicle",
            FailureReason::DeadlineExceeded { .. } => "deadline_exceeded",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::NoSuitableVehicle => f.write_str("No suitable vehicle available"),
            FailureReason::DeadlineExceeded { eta, deadline } => {
                write!(f, "ETA ({eta}) exceeds deadline ({deadline})")
            }
        }
    }
}

/// A committed delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// Clock when the decision was made.
    pub time:        Minute,
    pub parcel:      ParcelId,
    pub vehicle:     VehicleId,
    pub destination: ZoneId,
    pub eta:         Minute,
    pub deadline:    Minute,
}

/// A parcel that was given up on, with the full parcel for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedDelivery {
    pub parcel: Parcel,
    pub reason: FailureReason,
}

/// One entry of the ordered decision stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// A busy vehicle was released; `time` is the clock when it happened.
    VehicleAvailable { time: Minute, vehicle: VehicleId },
    Assigned(Assignment),
    Failed { time: Minute, parcel: ParcelId, reason: FailureReason },
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::VehicleAvailable { time, vehicle } => {
                write!(f, "t={time} vehicle {vehicle} available")
            }
            Decision::Assigned(a) => write!(
                f,
                "t={} parcel {} -> vehicle {} zone {} eta {} (deadline {})",
                a.time, a.parcel, a.vehicle, a.destination, a.eta, a.deadline
            ),
            Decision::Failed { time, parcel, reason } => {
                write!(f, "t={time} parcel {parcel} failed: {reason}")
            }
        }
    }
}

// ── DecisionLog ───────────────────────────────────────────────────────────────

/// Ordered record of everything the dispatcher decided.
///
/// Both the decision list and the failure list may be bounded.  Past the
/// bound new entries are dropped and counted; totals keep counting every
/// decision whether it was kept or not.
#[derive(Clone, Debug, Default)]
pub struct DecisionLog {
    decisions:         Vec<Decision>,
    failures:          Vec<FailedDelivery>,
    decision_capacity: Option<usize>,
    failure_capacity:  Option<usize>,
    dropped_decisions: usize,
    dropped_failures:  usize,
    assigned:          usize,
    failed:            usize,
    released:          usize,
}

impl DecisionLog {
    pub fn new(decision_capacity: Option<usize>, failure_capacity: Option<usize>) -> Self {
        Self {
            decision_capacity,
            failure_capacity,
            ..Self::default()
        }
    }

    /// Append `decision`.  Returns `false` if it was dropped for lack of room.
    pub fn record(&mut self, decision: Decision) -> bool {
        match decision {
            Decision::VehicleAvailable { .. } => self.released += 1,
            Decision::Assigned(_)             => self.assigned += 1,
            Decision::Failed { .. }           => self.failed += 1,
        }
        if self.decision_capacity.is_some_and(|cap| self.decisions.len() >= cap) {
            self.dropped_decisions += 1;
            return false;
        }
        self.decisions.push(decision);
        true
    }

    /// Append to the failure list.  Returns `false` if it was dropped.
    pub fn record_failure(&mut self, failure: FailedDelivery) -> bool {
        if self.failure_capacity.is_some_and(|cap| self.failures.len() >= cap) {
            self.dropped_failures += 1;
            return false;
        }
        self.failures.push(failure);
        true
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn failures(&self) -> &[FailedDelivery] {
        &self.failures
    }

    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.decisions.iter().filter_map(|d| match d {
            Decision::Assigned(a) => Some(a),
            _ => None,
        })
    }

    pub fn dropped_decisions(&self) -> usize {
        self.dropped_decisions
    }

    pub fn dropped_failures(&self) -> usize {
        self.dropped_failures
    }

    /// Assignments made, including any dropped from the log.
    pub fn assigned_total(&self) -> usize {
        self.assigned
    }

    pub fn failed_total(&self) -> usize {
        self.failed
    }

    pub fn released_total(&self) -> usize {
        self.released
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}
