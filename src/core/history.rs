//! State transition history tracking.
//!
//! Keeps an ordered record of every transition a machine actually applied.
//! Operations rejected by a guard never reach the history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use helmsman::core::StateTransition;
/// use helmsman::ship::ShipState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ShipState::Stopped,
///     to: ShipState::Waiting,
///     operation: "start".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the operation that fired the transition
    pub operation: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// True when the operation fired but left the machine where it was,
    /// as cargo handling does.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of applied state transitions.
///
/// `record` consumes the history and hands back the extended one, so a
/// history value is never observed half-updated.
///
/// # Example
///
/// ```rust
/// use helmsman::core::{StateHistory, StateTransition};
/// use helmsman::ship::ShipState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: ShipState::Stopped,
///         to: ShipState::Waiting,
///         operation: "start".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: ShipState::Waiting,
///         to: ShipState::Moving,
///         operation: "navigate_to".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.path();
/// assert_eq!(path, vec![&ShipState::Stopped, &ShipState::Waiting, &ShipState::Moving]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial `from` state followed by the `to` state of each
    /// transition. Self-loops show up as repeated entries.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions or the timestamps run
    /// backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all transitions in the order they were applied.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
