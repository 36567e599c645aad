//! Graph-subsystem error type.

use thiserror::Error;

use pd_core::ZoneId;

/// Errors produced by `pd-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("zone {zone} out of range for a graph of {zone_count} zones")]
    ZoneOutOfRange { zone: ZoneId, zone_count: usize },

    #[error("{zone_count} zones exceeds the limit of {max}")]
    TooManyZones { zone_count: usize, max: usize },

    #[error("edge parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
