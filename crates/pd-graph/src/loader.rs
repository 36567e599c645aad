//! CSV edge loader.
//!
//! # CSV format
//!
//! One row per undirected edge, travel time in minutes:
//!
//! ```csv
//! from,to,minutes
//! 0,1,10
//! 0,2,15
//! 1,2,5
//! ```
//!
//! Zone bounds are not checked here; [`ZoneGraph::from_edges`] does that
//! once the zone count is known.
//!
//! [`ZoneGraph::from_edges`]: crate::ZoneGraph::from_edges

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Edge, GraphError, GraphResult};

#[derive(Deserialize)]
struct EdgeRecord {
    from:    u32,
    to:      u32,
    minutes: u32,
}

/// Load an edge list from a CSV file.
pub fn load_edges_csv(path: &Path) -> GraphResult<Vec<Edge>> {
    let file = std::fs::File::open(path)?;
    load_edges_reader(file)
}

/// Like [`load_edges_csv`] but accepts any `Read` source.
pub fn load_edges_reader<R: Read>(reader: R) -> GraphResult<Vec<Edge>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<EdgeRecord>()
        .map(|row| {
            let row = row.map_err(|e| GraphError::Parse(e.to_string()))?;
            Ok(Edge::new(row.from, row.to, row.minutes))
        })
        .collect()
}
