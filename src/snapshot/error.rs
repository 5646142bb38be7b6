//! Snapshot error types.

use crate::ship::ShipState;
use crate::systems::{CargoState, RatingError};
use thiserror::Error;

/// Why a ship snapshot could not be encoded, decoded or trusted.
#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("failed to encode ship snapshot: {0}")]
    Encode(String),

    #[error("failed to decode ship snapshot: {0}")]
    Decode(String),

    #[error("snapshot format v{found} is not readable (this build reads v{supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// An engine or hold rating no real subsystem could have.
    #[error("snapshot carries an impossible rating: {0}")]
    Rating(#[from] RatingError),

    #[error("cargo weight {weight} t lies outside the hold's 0..={capacity} t")]
    CargoOutOfRange { weight: f64, capacity: f64 },

    /// `Full` must be reported exactly when the hold is at capacity.
    #[error("cargo reported {state} with {weight} t in a {capacity} t hold")]
    CargoStateMismatch {
        state: CargoState,
        weight: f64,
        capacity: f64,
    },

    #[error("cargo caught mid-operation in {0}")]
    CargoMidOperation(CargoState),

    #[error("navigation is inactive but still heading for {destination:?}")]
    NavigationMismatch { destination: String },

    #[error("history ends in {last} but the ship reports {state}")]
    HistoryMismatch { last: ShipState, state: ShipState },
}
