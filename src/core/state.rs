//! Core State trait shared by the ship and its subsystem state machines.
//!
//! All state enums in the crate implement this trait, which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing where
/// a machine currently is.
///
/// # Required Traits
///
/// - `Copy`: States are plain tags and are passed around by value
/// - `PartialEq`: States must be comparable for guard evaluation
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States appear in snapshots and history
///
/// # Example
///
/// ```rust
/// use helmsman::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum HatchState {
///     Closed,
///     Opening,
///     Open,
///     Jammed,
/// }
///
/// impl State for HatchState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opening => "Opening",
///             Self::Open => "Open",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_transient(&self) -> bool {
///         matches!(self, Self::Opening)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
///
/// assert!(HatchState::Opening.is_transient());
/// assert!(!HatchState::Open.is_error());
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for reports and diagnostics.
    fn name(&self) -> &'static str;

    /// Check if this state only exists inside a single operation.
    ///
    /// Transient states are set and overwritten before an operation returns,
    /// so callers must never observe them between calls.
    ///
    /// Default implementation returns `false`.
    fn is_transient(&self) -> bool {
        false
    }

    /// Check if this state signals a fault condition.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
