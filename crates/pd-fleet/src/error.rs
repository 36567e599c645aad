use thiserror::Error;

use pd_core::VehicleId;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("vehicle {0} is already registered")]
    DuplicateVehicle(VehicleId),

    #[error("vehicle registry is full ({slots} slots)")]
    RegistryFull { slots: usize },

    #[error("vehicle {0} has no remaining capacity")]
    NoCapacity(VehicleId),

    #[error("vehicle parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
