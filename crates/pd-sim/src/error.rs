use thiserror::Error;

use pd_core::{CoreError, VehicleSlot, ZoneId};
use pd_fleet::FleetError;
use pd_graph::GraphError;
use pd_queue::QueueError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{what} {id} refers to zone {zone}, but the map has {zone_count} zones")]
    UnknownZone {
        what:       &'static str,
        id:         String,
        zone:       ZoneId,
        zone_count: usize,
    },

    #[error("no vehicle in registry {0}")]
    EmptySlot(VehicleSlot),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Fleet(#[from] FleetError),
}

pub type SimResult<T> = Result<T, SimError>;
