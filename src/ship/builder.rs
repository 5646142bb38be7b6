//! Builder for assembling a ship from its parts.

use super::error::BuildError;
use super::Ship;
use crate::core::SharedClock;
use crate::systems::{check_capacity, check_power, CargoHold, Logbook, Navigator, Propulsion};

/// Fluent builder that refuses to produce a ship with a missing part, or
/// with an engine or hold whose rating is out of range.
///
/// ```rust
/// use helmsman::ship::{ShipBuilder, ShipState};
/// use helmsman::systems::{CargoSystem, Engine, NavigationSystem, OperationLog};
///
/// let ship = ShipBuilder::new()
///     .identifier("SHIP002")
///     .engine(Engine::new(250.0)?)
///     .cargo(CargoSystem::new(800.0)?)
///     .navigation(NavigationSystem::new())
///     .log(OperationLog::new())
///     .build()?;
///
/// assert_eq!(ship.state(), ShipState::Stopped);
/// # Ok::<(), helmsman::ship::BuildError>(())
/// ```
pub struct ShipBuilder<E, C, N, L> {
    identifier: Option<String>,
    engine: Option<E>,
    cargo: Option<C>,
    navigation: Option<N>,
    log: Option<L>,
    clock: Option<SharedClock>,
}

impl<E, C, N, L> ShipBuilder<E, C, N, L>
where
    E: Propulsion,
    C: CargoHold,
    N: Navigator,
    L: Logbook,
{
    pub fn new() -> Self {
        Self {
            identifier: None,
            engine: None,
            cargo: None,
            navigation: None,
            log: None,
            clock: None,
        }
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn engine(mut self, engine: E) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn cargo(mut self, cargo: C) -> Self {
        self.cargo = Some(cargo);
        self
    }

    pub fn navigation(mut self, navigation: N) -> Self {
        self.navigation = Some(navigation);
        self
    }

    pub fn log(mut self, log: L) -> Self {
        self.log = Some(log);
        self
    }

    /// Clock for transition history. Defaults to the system clock.
    pub fn clock(mut self, clock: SharedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the ship in its initial `Stopped` state.
    pub fn build(self) -> Result<Ship<E, C, N, L>, BuildError> {
        let identifier = self.identifier.ok_or(BuildError::MissingIdentifier)?;
        if identifier.trim().is_empty() {
            return Err(BuildError::EmptyIdentifier);
        }
        let engine = self.engine.ok_or(BuildError::MissingEngine)?;
        let cargo = self.cargo.ok_or(BuildError::MissingCargo)?;
        let navigation = self.navigation.ok_or(BuildError::MissingNavigation)?;
        let log = self.log.ok_or(BuildError::MissingLog)?;

        check_power(engine.power())?;
        check_capacity(cargo.max_capacity())?;

        let ship = Ship::new(identifier, engine, cargo, navigation, log);
        Ok(match self.clock {
            Some(clock) => ship.with_clock(clock),
            None => ship,
        })
    }
}

impl<E, C, N, L> Default for ShipBuilder<E, C, N, L>
where
    E: Propulsion,
    C: CargoHold,
    N: Navigator,
    L: Logbook,
{
    fn default() -> Self {
        Self::new()
    }
}
