//! Point-in-time snapshots of a ship.
//!
//! A snapshot is a serializable, versioned copy of everything a ship can
//! report: its state, each subsystem's readings, the audit trail and the
//! transition history. Snapshots live in memory; where the bytes go is up to
//! the caller.

use crate::core::{Clock, State, StateHistory};
use crate::ship::{Ship, ShipState};
use crate::systems::{
    check_capacity, check_power, CargoHold, CargoState, EngineState, LogEntry, Logbook, Navigator,
    Propulsion, NO_DESTINATION,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineReading {
    pub power: f64,
    pub state: EngineState,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CargoReading {
    pub current_weight: f64,
    pub max_capacity: f64,
    pub state: CargoState,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationReading {
    pub destination: String,
    pub active: bool,
}

/// Serializable view of a ship at one instant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShipSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken, per the ship's clock
    pub taken_at: DateTime<Utc>,

    pub identifier: String,
    pub state: ShipState,
    pub engine: EngineReading,
    pub cargo: CargoReading,
    pub navigation: NavigationReading,

    /// Audit trail in write order
    pub log: Vec<LogEntry>,

    pub history: StateHistory<ShipState>,
}

impl ShipSnapshot {
    pub fn capture<E, C, N, L>(ship: &Ship<E, C, N, L>) -> Self
    where
        E: Propulsion,
        C: CargoHold,
        N: Navigator,
        L: Logbook,
    {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: ship.clock().now(),
            identifier: ship.identifier().to_string(),
            state: ship.state(),
            engine: EngineReading {
                power: ship.engine().power(),
                state: ship.engine().state(),
            },
            cargo: CargoReading {
                current_weight: ship.cargo().current_weight(),
                max_capacity: ship.cargo().max_capacity(),
                state: ship.cargo().state(),
            },
            navigation: NavigationReading {
                destination: ship.navigation().current_destination().to_string(),
                active: ship.navigation().is_active(),
            },
            log: ship.log().entries().to_vec(),
            history: ship.history().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::Decode(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::Decode(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the version and the invariants a live ship always upholds.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        check_power(self.engine.power)?;
        let cargo = &self.cargo;
        check_capacity(cargo.max_capacity)?;
        if !(0.0..=cargo.max_capacity).contains(&cargo.current_weight) {
            return Err(SnapshotError::CargoOutOfRange {
                weight: cargo.current_weight,
                capacity: cargo.max_capacity,
            });
        }
        if cargo.state.is_transient() {
            return Err(SnapshotError::CargoMidOperation(cargo.state));
        }
        let at_capacity = cargo.current_weight >= cargo.max_capacity;
        if (cargo.state == CargoState::Full) != at_capacity {
            return Err(SnapshotError::CargoStateMismatch {
                state: cargo.state,
                weight: cargo.current_weight,
                capacity: cargo.max_capacity,
            });
        }

        let nav = &self.navigation;
        if !nav.active && nav.destination != NO_DESTINATION {
            return Err(SnapshotError::NavigationMismatch {
                destination: nav.destination.clone(),
            });
        }

        if let Some(last) = self.history.transitions().last() {
            if last.to != self.state {
                return Err(SnapshotError::HistoryMismatch {
                    last: last.to,
                    state: self.state,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedClock, SharedClock};
    use crate::ship::StandardShip;
    use crate::systems::{CargoSystem, Engine, NavigationSystem, OperationLog, RatingError};
    use chrono::TimeZone;
    use std::sync::Arc;

    fn underway() -> StandardShip {
        let clock: SharedClock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 7, 14, 9, 0, 0).unwrap(),
        ));
        let mut ship = Ship::new(
            "SHIP001",
            Engine::new(200.0).unwrap(),
            CargoSystem::new(1000.0).unwrap(),
            NavigationSystem::new(),
            OperationLog::with_clock(clock.clone()),
        )
        .with_clock(clock);
        ship.start();
        ship.load_cargo(300.0).unwrap();
        ship.navigate_to("Port B");
        ship
    }

    #[test]
    fn capture_reads_every_subsystem() {
        let snapshot = ShipSnapshot::capture(&underway());

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.identifier, "SHIP001");
        assert_eq!(snapshot.state, ShipState::Moving);
        assert_eq!(snapshot.engine.state, EngineState::On);
        assert_eq!(snapshot.cargo.current_weight, 300.0);
        assert_eq!(snapshot.navigation.destination, "Port B");
        assert!(snapshot.navigation.active);
        assert_eq!(snapshot.log.len(), 3);
        assert_eq!(snapshot.history.len(), 3);
        assert_eq!(
            snapshot.taken_at,
            Utc.with_ymd_and_hms(2024, 7, 14, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn json_survives_decoding() {
        let snapshot = ShipSnapshot::capture(&underway());
        let decoded = ShipSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(decoded.id, snapshot.id);
        assert_eq!(decoded.log, snapshot.log);
        assert_eq!(decoded.cargo, snapshot.cargo);
    }

    #[test]
    fn binary_survives_decoding() {
        let snapshot = ShipSnapshot::capture(&underway());
        let decoded = ShipSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();

        assert_eq!(decoded.state, ShipState::Moving);
        assert_eq!(decoded.history.transitions(), snapshot.history.transitions());
    }

    #[test]
    fn rejects_future_version() {
        let mut snapshot = ShipSnapshot::capture(&underway());
        snapshot.version = SNAPSHOT_VERSION + 1;
        let json = snapshot.to_json().unwrap();

        let err = ShipSnapshot::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::UnsupportedVersion { found: 2, supported: 1 }
        ));
    }

    #[test]
    fn rejects_overloaded_cargo() {
        let mut snapshot = ShipSnapshot::capture(&underway());
        snapshot.cargo.current_weight = 5000.0;

        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::CargoOutOfRange {
                weight: 5000.0,
                capacity: 1000.0
            })
        );
    }

    #[test]
    fn rejects_transient_cargo_state() {
        let mut snapshot = ShipSnapshot::capture(&underway());
        snapshot.cargo.state = CargoState::Loading;

        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::CargoMidOperation(CargoState::Loading))
        );
    }

    #[test]
    fn rejects_inconsistent_navigation() {
        let mut snapshot = ShipSnapshot::capture(&underway());
        snapshot.navigation.active = false;
        assert_eq!(snapshot.navigation.destination, "Port B");

        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::NavigationMismatch { .. })
        ));
    }

    #[test]
    fn rejects_garbage_input() {
        assert!(matches!(
            ShipSnapshot::from_json("{not json"),
            Err(SnapshotError::Decode(_))
        ));
        assert!(matches!(
            ShipSnapshot::from_bytes(&[1, 2, 3]),
            Err(SnapshotError::Decode(_))
        ));
    }

    #[test]
    fn rejects_full_state_on_partial_hold() {
        let mut snapshot = ShipSnapshot::capture(&underway());
        snapshot.cargo.current_weight = 0.0;
        snapshot.cargo.state = CargoState::Full;
        let json = snapshot.to_json().unwrap();

        assert!(matches!(
            ShipSnapshot::from_json(&json),
            Err(SnapshotError::CargoStateMismatch {
                state: CargoState::Full,
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_state_on_full_hold() {
        let mut snapshot = ShipSnapshot::capture(&underway());
        snapshot.cargo.current_weight = snapshot.cargo.max_capacity;

        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::CargoStateMismatch {
                state: CargoState::Empty,
                ..
            })
        ));
    }

    #[test]
    fn full_hold_snapshot_is_accepted() {
        let mut ship = underway();
        ship.wait();
        ship.load_cargo(700.0).unwrap();
        let snapshot = ShipSnapshot::capture(&ship);

        assert_eq!(snapshot.cargo.state, CargoState::Full);
        assert_eq!(snapshot.validate(), Ok(()));
    }

    #[test]
    fn rejects_impossible_ratings() {
        let mut snapshot = ShipSnapshot::capture(&underway());
        snapshot.cargo.max_capacity = -10.0;
        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::Rating(RatingError::InvalidCapacity(-10.0)))
        );

        let mut snapshot = ShipSnapshot::capture(&underway());
        snapshot.engine.power = -1.0;
        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::Rating(RatingError::InvalidPower(-1.0)))
        );
    }

    #[test]
    fn rejects_history_that_disagrees_with_state() {
        let mut snapshot = ShipSnapshot::capture(&underway());
        snapshot.state = ShipState::Stopped;

        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::HistoryMismatch {
                last: ShipState::Moving,
                state: ShipState::Stopped
            })
        );
    }

    #[test]
    fn errors_name_the_broken_invariant() {
        let err = SnapshotError::CargoOutOfRange {
            weight: 5000.0,
            capacity: 1000.0,
        };
        assert_eq!(
            err.to_string(),
            "cargo weight 5000 t lies outside the hold's 0..=1000 t"
        );
    }
}
