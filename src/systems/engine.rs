//! Main engine: a binary on/off device with a power-derived fault flag.

use super::error::{check_power, RatingError};
use crate::state_enum;

/// Rated power below which `check_state` declares the engine faulty.
pub const MIN_SERVICEABLE_POWER: f64 = 100.0;

state_enum! {
    /// Engine state. `Faulty` is only ever set by a diagnostic check and is
    /// ignored by the on/off controls.
    pub enum EngineState {
        Off,
        On,
        Faulty,
    }
    error: [Faulty]
}

/// Engine capability the ship drives.
pub trait Propulsion {
    fn power(&self) -> f64;
    fn state(&self) -> EngineState;
    fn turn_on(&mut self);
    fn turn_off(&mut self);
    fn check_state(&mut self);
}

/// Engine with a fixed rated power.
#[derive(Clone, Debug, PartialEq)]
pub struct Engine {
    power: f64,
    state: EngineState,
}

impl Engine {
    /// A stopped engine. Power must be finite and non-negative.
    pub fn new(power: f64) -> Result<Self, RatingError> {
        Ok(Self {
            power: check_power(power)?,
            state: EngineState::Off,
        })
    }
}

impl Propulsion for Engine {
    fn power(&self) -> f64 {
        self.power
    }

    fn state(&self) -> EngineState {
        self.state
    }

    fn turn_on(&mut self) {
        if self.state == EngineState::Off {
            self.state = EngineState::On;
        }
    }

    fn turn_off(&mut self) {
        if self.state == EngineState::On {
            self.state = EngineState::Off;
        }
    }

    /// Marks the engine faulty when underpowered. Never clears the flag.
    fn check_state(&mut self) {
        if self.power < MIN_SERVICEABLE_POWER {
            self.state = EngineState::Faulty;
        }
    }
}
