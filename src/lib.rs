//! Helmsman: guarded state machine for vessel control
//!
//! A [`Ship`](ship::Ship) coordinates an engine, a cargo hold, a navigation
//! system and an operation log. Every ship operation is guarded by the
//! current state: when the guard fails the call does nothing at all, with no
//! error and no log entry. The only operation that can fail is loading more
//! cargo than the hold can take.
//!
//! # Core Concepts
//!
//! - **State**: Closed state enums implementing the `State` trait
//! - **Guards**: Pure predicates deciding whether an operation may fire
//! - **History**: Ordered record of the transitions a ship applied
//! - **Dispatcher**: Stateless translation of command names into operations
//!
//! # Example
//!
//! ```rust
//! use helmsman::dispatch::PortDispatcher;
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
//! let port = PortDispatcher::new();
//!
//! port.send_command(&mut ship, "start")?;
//! port.send_command(&mut ship, "load")?;
//! port.send_command(&mut ship, "navigate")?;
//!
//! assert_eq!(ship.state(), ShipState::Moving);
//! assert_eq!(
//!     port.request_report(&ship),
//!     "Ship SHIP001: State=Moving, Cargo=100 tons, Destination=Port B"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod dispatch;
pub mod ship;
pub mod snapshot;
pub mod systems;

// Re-export commonly used types
pub use self::core::{Guard, State, StateHistory, StateTransition};
pub use dispatch::PortDispatcher;
pub use ship::{Ship, ShipState, Vessel};
pub use systems::CapacityExceeded;
