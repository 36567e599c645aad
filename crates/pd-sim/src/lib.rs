//! `pd-sim` — the dispatch loop of the parcel dispatch simulator.
//!
//! # Event loop
//!
//! ```text
//! while parcels pending or availability events pending:
//!   ① Release  — pop every availability event due at or before the clock;
//!                mark the vehicle available and log VehicleAvailable.
//!   ② Dispatch — take the highest-ranked parcel:
//!                  nearest feasible vehicle  → commit, schedule its
//!                                              availability at the ETA,
//!                                              clock jumps to the ETA
//!                  none / ETA past deadline  → log Failed
//!   ③ Idle     — no parcel pending: clock jumps to the next event time.
//! ```
//!
//! # Modules
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`builder`]   | `DispatcherBuilder` — validated setup                |
//! | [`dispatcher`]| `Dispatcher`, `Step`, `RunSummary`                   |
//! | [`decision`]  | `Decision`, `Assignment`, `FailureReason`, `DecisionLog` |
//! | [`observer`]  | `DispatchObserver` callbacks                         |
//! | [`scenario`]  | `Scenario` inputs, sample data, CSV loading          |
//! | [`synthetic`] | Seeded random scenarios                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pd_core::DispatchConfig;
//! use pd_graph::DijkstraRouter;
//! use pd_sim::{DispatcherBuilder, NoopObserver, Scenario};
//!
//! let scenario = Scenario::sample();
//! let mut dispatcher =
//!     DispatcherBuilder::from_scenario(&scenario, DispatchConfig::default(), DijkstraRouter)?
//!         .build();
//! let summary = dispatcher.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod decision;
pub mod dispatcher;
pub mod error;
pub mod observer;
pub mod scenario;
pub mod synthetic;


pub use builder::DispatcherBuilder;
pub use decision::{Assignment, Decision, DecisionLog, FailedDelivery, FailureReason};
pub use dispatcher::{Dispatcher, RunSummary, Step};
pub use error::{SimError, SimResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use scenario::Scenario;
pub use synthetic::SyntheticParams;
