//! Cargo hold: a bounded accumulator of tonnage.

use super::error::{check_capacity, RatingError};
use crate::state_enum;
use thiserror::Error;
use tracing::warn;

state_enum! {
    /// Cargo state as seen between calls: `Empty` until the hold reaches
    /// capacity, then `Full`. `Loading` only exists inside `load`.
    pub enum CargoState {
        Empty,
        Loading,
        Full,
    }
    transient: [Loading]
}

/// A load that would take the hold past its capacity, or a weight that is
/// negative or not a number.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("Maximum weight cannot be more than maximum capacity (current {current}, requested {requested}, capacity {capacity})")]
pub struct CapacityExceeded {
    pub current: f64,
    pub requested: f64,
    pub capacity: f64,
}

/// Cargo capability the ship drives.
pub trait CargoHold {
    fn current_weight(&self) -> f64;
    fn max_capacity(&self) -> f64;
    fn state(&self) -> CargoState;
    fn load(&mut self, weight: f64) -> Result<(), CapacityExceeded>;
    fn unload(&mut self);
}

/// Cargo hold with a fixed maximum capacity.
///
/// Invariant: `0 <= current_weight <= max_capacity` after every call.
#[derive(Clone, Debug, PartialEq)]
pub struct CargoSystem {
    current_weight: f64,
    max_capacity: f64,
    state: CargoState,
}

impl CargoSystem {
    /// An empty hold. Capacity must be finite and strictly positive.
    pub fn new(max_capacity: f64) -> Result<Self, RatingError> {
        Ok(Self {
            current_weight: 0.0,
            max_capacity: check_capacity(max_capacity)?,
            state: CargoState::Empty,
        })
    }

    /// Remaining room before the hold is full.
    pub fn headroom(&self) -> f64 {
        self.max_capacity - self.current_weight
    }

    fn settle(current_weight: f64, max_capacity: f64) -> CargoState {
        if current_weight >= max_capacity {
            CargoState::Full
        } else {
            CargoState::Empty
        }
    }
}

impl CargoHold for CargoSystem {
    fn current_weight(&self) -> f64 {
        self.current_weight
    }

    fn max_capacity(&self) -> f64 {
        self.max_capacity
    }

    fn state(&self) -> CargoState {
        self.state
    }

    /// Adds `weight` tons. Nothing changes when the load is refused.
    fn load(&mut self, weight: f64) -> Result<(), CapacityExceeded> {
        let acceptable = weight >= 0.0 && self.current_weight + weight <= self.max_capacity;
        if !acceptable {
            warn!(
                current = self.current_weight,
                requested = weight,
                capacity = self.max_capacity,
                "cargo load refused"
            );
            return Err(CapacityExceeded {
                current: self.current_weight,
                requested: weight,
                capacity: self.max_capacity,
            });
        }

        self.current_weight += weight;
        self.state = Self::settle(self.current_weight, self.max_capacity);
        Ok(())
    }

    fn unload(&mut self) {
        self.current_weight = 0.0;
        self.state = CargoState::Empty;
    }
}
