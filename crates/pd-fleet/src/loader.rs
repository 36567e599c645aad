//! CSV vehicle loader.
//!
//! # CSV format
//!
//! ```csv
//! id,location,capacity
//! V1,0,2
//! V2,2,1
//! ```
//!
//! Duplicate ids are not checked here; the registry rejects them on insert.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pd_core::ZoneId;

use crate::{FleetError, FleetResult, Vehicle};

#[derive(Deserialize)]
struct VehicleRecord {
    id:       String,
    location: u32,
    capacity: u32,
}

/// Load vehicles from a CSV file, in file order.
pub fn load_vehicles_csv(path: &Path) -> FleetResult<Vec<Vehicle>> {
    let file = std::fs::File::open(path)?;
    load_vehicles_reader(file)
}

/// Like [`load_vehicles_csv`] but accepts any `Read` source.
pub fn load_vehicles_reader<R: Read>(reader: R) -> FleetResult<Vec<Vehicle>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<VehicleRecord>()
        .map(|row| {
            let row = row.map_err(|e| FleetError::Parse(e.to_string()))?;
            Ok(Vehicle::new(row.id, ZoneId(row.location), row.capacity))
        })
        .collect()
}
