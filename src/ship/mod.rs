//! The vessel-level state machine.
//!
//! A [`Ship`] owns an engine, a cargo hold, a navigation system and an
//! operation log, and exposes the operations that move it between
//! `Stopped`, `Waiting` and `Moving`. Every operation has the same shape:
//!
//! 1. check the guard for the current state; on failure do nothing at all
//! 2. drive the subsystem
//! 3. settle into the target state, write the audit line, record history
//!
//! Cargo handling passes through a loading or unloading phase, but the ship
//! settles back into `Waiting` before the call returns, so that phase is not
//! stored.
//!
//! # Example
//!
//! ```rust
//! use helmsman::ship::{Ship, ShipState};
//! use helmsman::systems::{CargoSystem, Engine, NavigationSystem, OperationLog};
//!
//! let mut ship = Ship::new(
//!     "SHIP001",
//!     Engine::new(200.0)?,
//!     CargoSystem::new(1000.0)?,
//!     NavigationSystem::new(),
//!     OperationLog::new(),
//! );
//!
//! ship.start();
//! ship.load_cargo(500.0)?;
//! ship.navigate_to("Port B");
//!
//! assert_eq!(ship.state(), ShipState::Moving);
//! assert_eq!(
//!     ship.generate_report(),
//!     "Ship SHIP001: State=Moving, Cargo=500 tons, Destination=Port B"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod error;
mod transitions;

pub use builder::ShipBuilder;
pub use error::BuildError;
pub use transitions::{Operation, TransitionRule, TransitionTable};

use crate::core::{system_clock, Clock, SharedClock, StateHistory, StateTransition};
use crate::state_enum;
use crate::systems::{
    CapacityExceeded, CargoHold, CargoSystem, Engine, Logbook, NavigationSystem, Navigator,
    OperationLog, Propulsion,
};
use tracing::{debug, trace};

state_enum! {
    /// Ship state observable between calls.
    pub enum ShipState {
        Stopped,
        Waiting,
        Moving,
    }
}

/// A ship wired with the crate's own subsystems.
pub type StandardShip = Ship<Engine, CargoSystem, NavigationSystem, OperationLog>;

/// Ship-level command surface, as driven by the port dispatcher.
pub trait Vessel {
    fn identifier(&self) -> &str;
    fn state(&self) -> ShipState;
    fn start(&mut self);
    fn stop(&mut self);
    fn wait(&mut self);
    fn load_cargo(&mut self, weight: f64) -> Result<(), CapacityExceeded>;
    fn unload_cargo(&mut self);
    fn navigate_to(&mut self, destination: &str);
    fn generate_report(&self) -> String;
}

/// Composite state machine for one vessel.
#[derive(Debug)]
pub struct Ship<E = Engine, C = CargoSystem, N = NavigationSystem, L = OperationLog> {
    identifier: String,
    state: ShipState,
    engine: E,
    cargo: C,
    navigation: N,
    log: L,
    rules: TransitionTable,
    history: StateHistory<ShipState>,
    clock: SharedClock,
}

impl<E, C, N, L> Ship<E, C, N, L>
where
    E: Propulsion,
    C: CargoHold,
    N: Navigator,
    L: Logbook,
{
    /// Create a ship in `Stopped`. History is stamped with the system clock.
    pub fn new(identifier: impl Into<String>, engine: E, cargo: C, navigation: N, log: L) -> Self {
        Self {
            identifier: identifier.into(),
            state: ShipState::Stopped,
            engine,
            cargo,
            navigation,
            log,
            rules: TransitionTable::standard(),
            history: StateHistory::new(),
            clock: system_clock(),
        }
    }

    /// Replace the clock used for transition history and snapshots.
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn state(&self) -> ShipState {
        self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn cargo(&self) -> &C {
        &self.cargo
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Transitions applied so far. Rejected operations never appear.
    pub fn history(&self) -> &StateHistory<ShipState> {
        &self.history
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    /// Operations the current state would accept.
    pub fn permitted_operations(&self) -> Vec<Operation> {
        self.rules.permitted(self.state)
    }

    pub fn start(&mut self) {
        let Some(to) = self.admit(Operation::Start) else {
            return;
        };
        self.engine.turn_on();
        self.settle(
            Operation::Start,
            to,
            "Ship started and moved to Waiting state.",
        );
    }

    pub fn stop(&mut self) {
        let Some(to) = self.admit(Operation::Stop) else {
            return;
        };
        self.engine.turn_off();
        self.settle(Operation::Stop, to, "Ship stopped.");
    }

    pub fn wait(&mut self) {
        let Some(to) = self.admit(Operation::Wait) else {
            return;
        };
        self.engine.turn_on();
        self.settle(Operation::Wait, to, "Ship Waiting.");
    }

    /// Load `weight` tons while `Waiting`.
    ///
    /// A refused load propagates `CapacityExceeded` and leaves the ship, its
    /// log and its history exactly as they were. In any other state the call
    /// is a no-op that returns `Ok`.
    pub fn load_cargo(&mut self, weight: f64) -> Result<(), CapacityExceeded> {
        let Some(to) = self.admit(Operation::LoadCargo) else {
            return Ok(());
        };
        self.cargo.load(weight)?;
        self.settle(
            Operation::LoadCargo,
            to,
            &format!("Loaded {weight} tons of cargo."),
        );
        Ok(())
    }

    pub fn unload_cargo(&mut self) {
        let Some(to) = self.admit(Operation::UnloadCargo) else {
            return;
        };
        self.cargo.unload();
        self.settle(Operation::UnloadCargo, to, "Cargo unloaded.");
    }

    pub fn navigate_to(&mut self, destination: &str) {
        let Some(to) = self.admit(Operation::NavigateTo) else {
            return;
        };
        self.navigation.set_destination(destination);
        self.settle(
            Operation::NavigateTo,
            to,
            &format!("Navigating to {destination}."),
        );
    }

    /// One-line summary of the ship. Pure read.
    pub fn generate_report(&self) -> String {
        format!(
            "Ship {}: State={}, Cargo={} tons, Destination={}",
            self.identifier,
            self.state,
            self.cargo.current_weight(),
            self.navigation.current_destination()
        )
    }

    fn admit(&self, operation: Operation) -> Option<ShipState> {
        let target = self.rules.resolve(self.state, operation);
        if target.is_none() {
            trace!(
                ship = %self.identifier,
                %operation,
                state = %self.state,
                "guard rejected operation"
            );
        }
        target
    }

    fn settle(&mut self, operation: Operation, to: ShipState, message: &str) {
        let from = self.state;
        self.state = to;
        self.log.log(message);
        self.history = std::mem::take(&mut self.history).record(StateTransition {
            from,
            to,
            operation: operation.name().to_string(),
            timestamp: self.clock.now(),
        });
        debug!(ship = %self.identifier, %operation, %from, %to, "transition applied");
    }
}

impl<E, C, N, L> Vessel for Ship<E, C, N, L>
where
    E: Propulsion,
    C: CargoHold,
    N: Navigator,
    L: Logbook,
{
    fn identifier(&self) -> &str {
        Ship::identifier(self)
    }

    fn state(&self) -> ShipState {
        Ship::state(self)
    }

    fn start(&mut self) {
        Ship::start(self)
    }

    fn stop(&mut self) {
        Ship::stop(self)
    }

    fn wait(&mut self) {
        Ship::wait(self)
    }

    fn load_cargo(&mut self, weight: f64) -> Result<(), CapacityExceeded> {
        Ship::load_cargo(self, weight)
    }

    fn unload_cargo(&mut self) {
        Ship::unload_cargo(self)
    }

    fn navigate_to(&mut self, destination: &str) {
        Ship::navigate_to(self, destination)
    }

    fn generate_report(&self) -> String {
        Ship::generate_report(self)
    }
}
