//! `pd-fleet` — vehicles and the registry that owns them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`vehicle`]  | `Vehicle` — location, capacity, availability           |
//! | [`registry`] | `VehicleRegistry` — open addressing, nearest search    |
//! | [`loader`]   | `load_vehicles_csv`, `load_vehicles_reader`            |
//! | [`error`]    | `FleetError`, `FleetResult<T>`                         |

pub mod error;
pub mod loader;
pub mod registry;
pub mod vehicle;


pub use error::{FleetError, FleetResult};
pub use loader::{load_vehicles_csv, load_vehicles_reader};
pub use registry::VehicleRegistry;
pub use vehicle::Vehicle;
