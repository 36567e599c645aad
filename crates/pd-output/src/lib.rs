//! `pd-output` — reports and decision writers for the parcel dispatch simulator.
//!
//! | Feature   | Backend | Files created                       |
//! |-----------|---------|-------------------------------------|
//! | *(none)*  | CSV     | `decisions.csv`, `summary.csv`      |
//! | `sqlite`  | SQLite  | `dispatch.db`                       |
//!
//! File backends implement [`DecisionWriter`] and are driven by
//! [`DecisionOutputObserver`], which implements `pd_sim::DispatchObserver`.
//! [`TextReport`] renders the plain-text delivery plan.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pd_output::{CsvWriter, DecisionOutputObserver, TextReport};
//!
//! let mut obs = DecisionOutputObserver::new(CsvWriter::new(Path::new("./out"))?);
//! dispatcher.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! print!("{}", TextReport::from_log(dispatcher.clock().start, dispatcher.log()));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DecisionOutputObserver;
pub use report::TextReport;
pub use row::{DecisionRow, SummaryRow};
pub use writer::DecisionWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
