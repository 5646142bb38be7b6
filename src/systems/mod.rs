//! Ship subsystems and the capability traits the ship drives them through.
//!
//! Each subsystem is a small machine of its own. The ship only ever sees the
//! traits, so any of them can be swapped for a test double.

mod cargo;
mod engine;
mod error;
mod navigation;
mod operation_log;

pub use cargo::{CapacityExceeded, CargoHold, CargoState, CargoSystem};
pub use engine::{Engine, EngineState, Propulsion, MIN_SERVICEABLE_POWER};
pub use error::{check_capacity, check_power, RatingError};
pub use navigation::{NavigationSystem, Navigator, NO_DESTINATION};
pub use operation_log::{LogEntry, Logbook, OperationLog};
