//! Core error type.
//!
//! Sub-crates define their own error enums; `pd-sim` wraps all of them.

use thiserror::Error;

use crate::ParcelId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parcel {0} has priority 0; priorities start at 1")]
    InvalidPriority(ParcelId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `pd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
