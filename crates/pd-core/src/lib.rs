//! `pd-core` — foundational types for the parcel dispatch simulator.
//!
//! This crate is a dependency of every other `pd-*` crate.  It has no `pd-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `ZoneId`, `VehicleSlot`, `ParcelId`, `VehicleId`        |
//! | [`time`]      | `Minute`, `DispatchClock`                               |
//! | [`parcel`]    | `Parcel` (immutable delivery request)                   |
//! | [`admission`] | `Admission` — accept/reject result of bounded inserts   |
//! | [`config`]    | `DispatchConfig`, `SchedulerOrder`, `RegistryHash`      |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod admission;
pub mod config;
pub mod error;
pub mod ids;
pub mod parcel;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use admission::Admission;
pub use config::{DispatchConfig, RegistryHash, SchedulerOrder};
pub use error::{CoreError, CoreResult};
pub use ids::{ParcelId, VehicleId, VehicleSlot, ZoneId};
pub use parcel::Parcel;
pub use time::{DispatchClock, Minute};
