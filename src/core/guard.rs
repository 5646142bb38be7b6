//! Guard predicates for controlling state transitions.
//!
//! A guard names the source states an operation may fire from. When the
//! guard fails the operation is skipped entirely.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use helmsman::core::Guard;
/// use helmsman::ship::ShipState;
///
/// let underway = Guard::new(|s: &ShipState| matches!(s, ShipState::Moving | ShipState::Waiting));
///
/// assert!(underway.check(&ShipState::Moving));
/// assert!(underway.check(&ShipState::Waiting));
/// assert!(!underway.check(&ShipState::Stopped));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that holds only in exactly `state`.
    pub fn only(state: S) -> Self
    where
        S: 'static,
    {
        Self::new(move |s| *s == state)
    }

    /// Guard that holds everywhere except `state`.
    pub fn except(state: S) -> Self
    where
        S: 'static,
    {
        Self::new(move |s| *s != state)
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum Door {
        Shut,
        Ajar,
        Open,
    }

    impl State for Door {
        fn name(&self) -> &'static str {
            match self {
                Self::Shut => "Shut",
                Self::Ajar => "Ajar",
                Self::Open => "Open",
            }
        }
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &Door| matches!(s, Door::Shut));

        assert!(guard.check(&Door::Shut));
        assert!(!guard.check(&Door::Open));
    }

    #[test]
    fn only_accepts_a_single_state() {
        let guard = Guard::only(Door::Ajar);

        assert!(guard.check(&Door::Ajar));
        assert!(!guard.check(&Door::Shut));
        assert!(!guard.check(&Door::Open));
    }

    #[test]
    fn except_rejects_a_single_state() {
        let guard = Guard::except(Door::Open);

        assert!(guard.check(&Door::Shut));
        assert!(guard.check(&Door::Ajar));
        assert!(!guard.check(&Door::Open));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|s: &Door| !matches!(s, Door::Open));

        assert_eq!(guard.check(&Door::Ajar), guard.check(&Door::Ajar));
    }
}
