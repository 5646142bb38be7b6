//! Vessel configuration.
//!
//! A ship is described by a small TOML document:
//!
//! ```toml
//! identifier = "SHIP001"
//!
//! [engine]
//! power = 200.0
//!
//! [cargo]
//! max_capacity = 1000.0
//! ```
//!
//! Validation reports every problem at once rather than stopping at the
//! first.

use crate::core::{system_clock, SharedClock};
use crate::ship::{Ship, StandardShip};
use crate::systems::{
    check_capacity, check_power, CargoSystem, Engine, NavigationSystem, OperationLog, RatingError,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselConfig {
    pub identifier: String,
    pub engine: EngineConfig,
    pub cargo: CargoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub power: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoConfig {
    pub max_capacity: f64,
}

/// A single invalid setting.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    #[error(transparent)]
    Rating(#[from] RatingError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {}", render(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn render(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn rated(check: Result<f64, RatingError>) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    match check {
        Ok(_) => Validation::success(()),
        Err(e) => Validation::fail(ConfigViolation::from(e)),
    }
}

fn reject(e: RatingError) -> ConfigError {
    ConfigError::Invalid(vec![ConfigViolation::from(e)])
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            identifier: "SHIP001".to_string(),
            engine: EngineConfig { power: 200.0 },
            cargo: CargoConfig {
                max_capacity: 1000.0,
            },
        }
    }
}

impl VesselConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.ensure_valid()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check every setting, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            if self.identifier.trim().is_empty() {
                Validation::fail(ConfigViolation::EmptyIdentifier)
            } else {
                Validation::success(())
            },
            rated(check_power(self.engine.power)),
            rated(check_capacity(self.cargo.max_capacity)),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    fn ensure_valid(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// Build a stopped ship with fresh subsystems on the system clock.
    pub fn build_ship(&self) -> Result<StandardShip, ConfigError> {
        self.build_ship_with_clock(system_clock())
    }

    pub fn build_ship_with_clock(&self, clock: SharedClock) -> Result<StandardShip, ConfigError> {
        self.ensure_valid()?;
        let engine = Engine::new(self.engine.power).map_err(reject)?;
        let cargo = CargoSystem::new(self.cargo.max_capacity).map_err(reject)?;
        Ok(Ship::new(
            self.identifier.clone(),
            engine,
            cargo,
            NavigationSystem::new(),
            OperationLog::with_clock(clock.clone()),
        )
        .with_clock(clock))
    }
}
