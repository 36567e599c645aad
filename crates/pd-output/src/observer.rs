//! `DecisionOutputObserver<W>` — bridges `DispatchObserver` to a `DecisionWriter`.

use log::warn;

use pd_sim::{Decision, DispatchObserver, RunSummary};

use crate::row::{DecisionRow, SummaryRow};
use crate::writer::DecisionWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that writes every decision and the final summary
/// to any [`DecisionWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `dispatcher.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct DecisionOutputObserver<W: DecisionWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: DecisionWriter> DecisionOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("decision output failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: DecisionWriter> DispatchObserver for DecisionOutputObserver<W> {
    fn on_decision(&mut self, decision: &Decision) {
        let row = DecisionRow::from(decision);
        let result = self.writer.write_decisions(std::slice::from_ref(&row));
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let result = self.writer.write_summary(&SummaryRow::from(summary));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
