//! Plain-text delivery plan.

use std::fmt;
use std::io::Write;

use pd_core::{Minute, ParcelId};
use pd_sim::{Decision, DecisionLog, DispatchObserver, FailureReason};

use crate::OutputResult;

/// The human-readable delivery plan: a header, one line per release or
/// assignment, then a failed-deliveries section when anything failed.
///
/// ```text
/// Delivery Plan (Starting at time 540 minutes):
/// Time 540: Parcel P1 assigned to Vehicle V2 for delivery to Zone 3, ETA: 550 (Deadline: 600)
/// Time 550: Vehicle V2 is now available.
///
/// Failed Deliveries:
/// Parcel P3: No suitable vehicle available
/// ```
///
/// Build one after a run with [`TextReport::from_log`], or pass it to
/// `run` as the observer to capture every decision as it happens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextReport {
    start:    Minute,
    lines:    Vec<String>,
    failures: Vec<(ParcelId, FailureReason)>,
}

impl TextReport {
    pub fn new(start: Minute) -> Self {
        Self { start, ..Self::default() }
    }

    /// Rebuild the report from a finished run's log.  Failures come from the
    /// failure list, so a bounded failure log bounds the report too.
    pub fn from_log(start: Minute, log: &DecisionLog) -> Self {
        let mut report = Self::new(start);
        for decision in log.decisions() {
            report.push_line(decision);
        }
        report.failures = log
            .failures()
            .iter()
            .map(|f| (f.parcel.id().clone(), f.reason))
            .collect();
        report
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> OutputResult<()> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }

    fn push_line(&mut self, decision: &Decision) {
        match decision {
            Decision::VehicleAvailable { time, vehicle } => {
                self.lines.push(format!("Time {time}: Vehicle {vehicle} is now available."));
            }
            Decision::Assigned(a) => self.lines.push(format!(
                "Time {}: Parcel {} assigned to Vehicle {} for delivery to Zone {}, ETA: {} (Deadline: {})",
                a.time, a.parcel, a.vehicle, a.destination, a.eta, a.deadline
            )),
            Decision::Failed { .. } => {}
        }
    }
}

impl DispatchObserver for TextReport {
    fn on_run_start(&mut self, start: Minute) {
        self.start = start;
    }

    fn on_decision(&mut self, decision: &Decision) {
        self.push_line(decision);
        if let Decision::Failed { parcel, reason, .. } = decision {
            self.failures.push((parcel.clone(), *reason));
        }
    }
}

impl fmt::Display for TextReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Delivery Plan (Starting at time {} minutes):", self.start)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        if !self.failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failed Deliveries:")?;
            for (parcel, reason) in &self.failures {
                writeln!(f, "Parcel {parcel}: {reason}")?;
            }
        }
        Ok(())
    }
}
