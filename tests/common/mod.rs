//! Shared test doubles and fixtures.
//!
//! The doubles record how the ship drove them instead of modelling real
//! behaviour, so tests can assert on exact call counts and arguments.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use helmsman::core::{FixedClock, SharedClock};
use helmsman::ship::Ship;
use helmsman::systems::{
    CapacityExceeded, CargoHold, CargoState, EngineState, Navigator, OperationLog, Propulsion,
};
use std::sync::Arc;

pub fn pinned_clock() -> SharedClock {
    Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
    ))
}

#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub turn_on_calls: usize,
    pub turn_off_calls: usize,
    pub check_calls: usize,
}

impl Propulsion for RecordingEngine {
    fn power(&self) -> f64 {
        200.0
    }

    fn state(&self) -> EngineState {
        EngineState::Off
    }

    fn turn_on(&mut self) {
        self.turn_on_calls += 1;
    }

    fn turn_off(&mut self) {
        self.turn_off_calls += 1;
    }

    fn check_state(&mut self) {
        self.check_calls += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingCargo {
    /// Weight reported to the ship, regardless of loads.
    pub reported_weight: f64,
    pub loads: Vec<f64>,
    pub unload_calls: usize,
    pub refuse_loads: bool,
}

impl CargoHold for RecordingCargo {
    fn current_weight(&self) -> f64 {
        self.reported_weight
    }

    fn max_capacity(&self) -> f64 {
        1000.0
    }

    fn state(&self) -> CargoState {
        CargoState::Empty
    }

    fn load(&mut self, weight: f64) -> Result<(), CapacityExceeded> {
        if self.refuse_loads {
            return Err(CapacityExceeded {
                current: self.reported_weight,
                requested: weight,
                capacity: 1000.0,
            });
        }
        self.loads.push(weight);
        Ok(())
    }

    fn unload(&mut self) {
        self.unload_calls += 1;
    }
}

#[derive(Debug)]
pub struct RecordingNavigator {
    pub destination: String,
    pub destinations: Vec<String>,
    pub stop_calls: usize,
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self {
            destination: "None".to_string(),
            destinations: Vec::new(),
            stop_calls: 0,
        }
    }
}

impl Navigator for RecordingNavigator {
    fn current_destination(&self) -> &str {
        &self.destination
    }

    fn is_active(&self) -> bool {
        !self.destinations.is_empty()
    }

    fn set_destination(&mut self, destination: &str) {
        self.destination = destination.to_string();
        self.destinations.push(destination.to_string());
    }

    fn stop_navigation(&mut self) {
        self.stop_calls += 1;
    }
}

pub type InstrumentedShip = Ship<RecordingEngine, RecordingCargo, RecordingNavigator, OperationLog>;

pub fn instrumented_ship() -> InstrumentedShip {
    instrumented_ship_with(RecordingCargo::default())
}

pub fn instrumented_ship_with(cargo: RecordingCargo) -> InstrumentedShip {
    let clock = pinned_clock();
    Ship::new(
        "SHIP001",
        RecordingEngine::default(),
        cargo,
        RecordingNavigator::default(),
        OperationLog::with_clock(clock.clone()),
    )
    .with_clock(clock)
}
