//! Flat row types written by output backends.

use pd_sim::{Decision, RunSummary};

/// One decision, flattened.  Columns that do not apply to the decision's
/// kind are `None` and written as empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRow {
    /// `"available"`, `"assigned"` or `"failed"`.
    pub kind:        &'static str,
    pub time:        u32,
    pub parcel_id:   Option<String>,
    pub vehicle_id:  Option<String>,
    pub destination: Option<u32>,
    pub eta:         Option<u32>,
    pub deadline:    Option<u32>,
    pub reason:      Option<String>,
}

impl From<&Decision> for DecisionRow {
    fn from(decision: &Decision) -> Self {
        match decision {
            Decision::VehicleAvailable { time, vehicle } => DecisionRow {
                kind:        "available",
                time:        time.0,
                parcel_id:   None,
                vehicle_id:  Some(vehicle.to_string()),
                destination: None,
                eta:         None,
                deadline:    None,
                reason:      None,
            },
            Decision::Assigned(a) => DecisionRow {
                kind:        "assigned",
                time:        a.time.0,
                parcel_id:   Some(a.parcel.to_string()),
                vehicle_id:  Some(a.vehicle.to_string()),
                destination: Some(a.destination.0),
                eta:         Some(a.eta.0),
                deadline:    Some(a.deadline.0),
                reason:      None,
            },
            Decision::Failed { time, parcel, reason } => DecisionRow {
                kind:        "failed",
                time:        time.0,
                parcel_id:   Some(parcel.to_string()),
                vehicle_id:  None,
                destination: None,
                eta:         None,
                deadline:    None,
                reason:      Some(reason.to_string()),
            },
        }
    }
}

/// Totals for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub start:             u32,
    pub end:               u32,
    pub iterations:        u64,
    pub assigned:          u64,
    pub failed:            u64,
    pub released:          u64,
    pub dropped_decisions: u64,
    pub dropped_failures:  u64,
    pub stranded:          u64,
}

impl From<&RunSummary> for SummaryRow {
    fn from(s: &RunSummary) -> Self {
        SummaryRow {
            start:             s.start.0,
            end:               s.end.0,
            iterations:        s.iterations,
            assigned:          s.assigned as u64,
            failed:            s.failed as u64,
            released:          s.released as u64,
            dropped_decisions: s.dropped_decisions as u64,
            dropped_failures:  s.dropped_failures as u64,
            stranded:          s.stranded as u64,
        }
    }
}
