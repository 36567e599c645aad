//! The `DecisionWriter` trait implemented by all backend writers.

use crate::{DecisionRow, OutputResult, SummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are returned to the caller; when driven by
/// [`DecisionOutputObserver`][crate::DecisionOutputObserver] they are stored
/// and retrieved with its `take_error`.
pub trait DecisionWriter {
    /// Write a batch of decision rows, in order.
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()>;

    /// Write the run's totals.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
