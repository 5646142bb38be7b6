//! Rating errors for subsystem construction.

use thiserror::Error;

/// A rated value a subsystem cannot be built with.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum RatingError {
    #[error("engine power must be a finite value >= 0 (got {0})")]
    InvalidPower(f64),

    #[error("cargo capacity must be a finite value > 0 (got {0})")]
    InvalidCapacity(f64),
}

/// Accepts any finite, non-negative power.
pub fn check_power(power: f64) -> Result<f64, RatingError> {
    if power.is_finite() && power >= 0.0 {
        Ok(power)
    } else {
        Err(RatingError::InvalidPower(power))
    }
}

/// Accepts any finite, strictly positive capacity.
pub fn check_capacity(max_capacity: f64) -> Result<f64, RatingError> {
    if max_capacity.is_finite() && max_capacity > 0.0 {
        Ok(max_capacity)
    } else {
        Err(RatingError::InvalidCapacity(max_capacity))
    }
}
