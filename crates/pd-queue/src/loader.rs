//! CSV parcel loader.
//!
//! # CSV format
//!
//! One row per parcel.  Times are absolute simulation minutes.
//!
//! ```csv
//! id,destination,deadline,order_time,priority
//! P1,3,600,100,2
//! P2,1,720,120,1
//! ```
//!
//! Rows are returned in file order; the queue does its own ordering.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pd_core::{Minute, Parcel, ZoneId};

use crate::{QueueError, QueueResult};

#[derive(Deserialize)]
struct ParcelRecord {
    id:          String,
    destination: u32,
    deadline:    u32,
    order_time:  u32,
    priority:    u32,
}

/// Load parcels from a CSV file.
pub fn load_parcels_csv(path: &Path) -> QueueResult<Vec<Parcel>> {
    let file = std::fs::File::open(path)?;
    load_parcels_reader(file)
}

/// Like [`load_parcels_csv`] but accepts any `Read` source.
pub fn load_parcels_reader<R: Read>(reader: R) -> QueueResult<Vec<Parcel>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut parcels = Vec::new();

    for result in csv_reader.deserialize::<ParcelRecord>() {
        let row = result.map_err(|e| QueueError::Parse(e.to_string()))?;
        parcels.push(Parcel::new(
            row.id,
            ZoneId(row.destination),
            Minute(row.deadline),
            Minute(row.order_time),
            row.priority,
        )?);
    }

    Ok(parcels)
}
