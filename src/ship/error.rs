//! Errors raised while assembling a ship.

use crate::systems::RatingError;
use thiserror::Error;

/// Errors that can occur when building a ship from its parts.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Ship identifier not specified. Call .identifier(id) before .build()")]
    MissingIdentifier,

    #[error("Ship identifier must not be empty")]
    EmptyIdentifier,

    #[error("Engine not specified. Call .engine(engine)")]
    MissingEngine,

    #[error("Cargo system not specified. Call .cargo(cargo)")]
    MissingCargo,

    #[error("Navigation system not specified. Call .navigation(navigation)")]
    MissingNavigation,

    #[error("Operation log not specified. Call .log(log)")]
    MissingLog,

    #[error("Part rejected: {0}")]
    Rating(#[from] RatingError),
}
