//! Core state machine building blocks.
//!
//! This module contains the pure pieces every machine in the crate is built
//! from:
//! - State definitions via the `State` trait and the `state_enum!` macro
//! - Guard predicates for transition control
//! - History of applied transitions
//! - The injected clock

mod clock;
mod guard;
mod history;
mod macros;
mod state;

pub use clock::{system_clock, Clock, FixedClock, SharedClock, SystemClock};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
