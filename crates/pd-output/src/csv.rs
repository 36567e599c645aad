//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `decisions.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::debug;

use crate::writer::DecisionWriter;
use crate::{DecisionRow, OutputResult, SummaryRow};

pub const DECISION_HEADER: [&str; 8] =
    ["kind", "time", "parcel_id", "vehicle_id", "destination", "eta", "deadline", "reason"];

pub const SUMMARY_HEADER: [&str; 9] = [
    "start",
    "end",
    "iterations",
    "assigned",
    "failed",
    "released",
    "dropped_decisions",
    "dropped_failures",
    "stranded",
];

/// Writes dispatch output to two CSV files.
pub struct CsvWriter {
    decisions: Writer<File>,
    summary:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        debug!("writing decision CSVs to {}", dir.display());

        let mut decisions = Writer::from_path(dir.join("decisions.csv"))?;
        decisions.write_record(DECISION_HEADER)?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(SUMMARY_HEADER)?;

        Ok(Self { decisions, summary, finished: false })
    }
}

fn cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}

impl DecisionWriter for CsvWriter {
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()> {
        for row in rows {
            self.decisions.write_record(&[
                row.kind.to_owned(),
                row.time.to_string(),
                cell(&row.parcel_id),
                cell(&row.vehicle_id),
                cell(&row.destination),
                cell(&row.eta),
                cell(&row.deadline),
                cell(&row.reason),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.start.to_string(),
            row.end.to_string(),
            row.iterations.to_string(),
            row.assigned.to_string(),
            row.failed.to_string(),
            row.released.to_string(),
            row.dropped_decisions.to_string(),
            row.dropped_failures.to_string(),
            row.stranded.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.decisions.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
