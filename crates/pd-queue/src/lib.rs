//! `pd-queue` — the two queues that drive a dispatch run.
//!
//! # Crate layout
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`parcel_queue`] | `ParcelQueue` — max-heap by urgency                  |
//! | [`scheduler`]    | `AvailabilityScheduler`, `AvailabilityEvent`         |
//! | [`loader`]       | `load_parcels_csv`, `load_parcels_reader`            |
//! | [`error`]        | `QueueError`, `QueueResult<T>`                       |
//!
//! Both queues can be bounded.  A full queue rejects the new item and says so
//! with [`Admission::Rejected`](pd_core::Admission); it never evicts.

pub mod error;
pub mod loader;
pub mod parcel_queue;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{QueueError, QueueResult};
pub use loader::{load_parcels_csv, load_parcels_reader};
pub use parcel_queue::ParcelQueue;
pub use scheduler::{AvailabilityEvent, AvailabilityScheduler};
