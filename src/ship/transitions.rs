//! The ship's transition table.
//!
//! Every operation has exactly one rule: a guard over the current state and
//! the state the ship settles in once the operation's effects have run.

use super::ShipState;
use crate::core::Guard;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State-changing ship operations. Reports are reads and have no rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Start,
    Stop,
    Wait,
    LoadCargo,
    UnloadCargo,
    NavigateTo,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Start,
        Operation::Stop,
        Operation::Wait,
        Operation::LoadCargo,
        Operation::UnloadCargo,
        Operation::NavigateTo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Start => "start",
            Operation::Stop => "stop",
            Operation::Wait => "wait",
            Operation::LoadCargo => "load_cargo",
            Operation::UnloadCargo => "unload_cargo",
            Operation::NavigateTo => "navigate_to",
        }
    }

    fn rule(self) -> TransitionRule {
        use ShipState::{Moving, Stopped, Waiting};

        match self {
            Operation::Start => TransitionRule::new(self, Guard::only(Stopped), Waiting),
            Operation::Stop => TransitionRule::new(
                self,
                Guard::new(|s: &ShipState| matches!(s, Moving | Waiting)),
                Stopped,
            ),
            // Universal way back to Waiting from anywhere else.
            Operation::Wait => TransitionRule::new(self, Guard::except(Waiting), Waiting),
            Operation::LoadCargo => TransitionRule::new(self, Guard::only(Waiting), Waiting),
            Operation::UnloadCargo => TransitionRule::new(self, Guard::only(Waiting), Waiting),
            Operation::NavigateTo => TransitionRule::new(self, Guard::only(Waiting), Moving),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Guard and destination for one operation.
#[derive(Debug)]
pub struct TransitionRule {
    pub operation: Operation,
    pub guard: Guard<ShipState>,
    pub to: ShipState,
}

impl TransitionRule {
    fn new(operation: Operation, guard: Guard<ShipState>, to: ShipState) -> Self {
        Self {
            operation,
            guard,
            to,
        }
    }
}

/// All ship rules, one per [`Operation`].
#[derive(Debug)]
pub struct TransitionTable {
    rules: Vec<TransitionRule>,
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TransitionTable {
    pub fn standard() -> Self {
        Self {
            rules: Operation::ALL.iter().map(|op| op.rule()).collect(),
        }
    }

    pub fn rule(&self, operation: Operation) -> Option<&TransitionRule> {
        self.rules.iter().find(|r| r.operation == operation)
    }

    /// Where `operation` takes a ship sitting in `from`, or `None` when the
    /// guard rejects it and the ship stays put.
    pub fn resolve(&self, from: ShipState, operation: Operation) -> Option<ShipState> {
        self.rule(operation)
            .filter(|rule| rule.guard.check(&from))
            .map(|rule| rule.to)
    }

    /// Operations whose guard accepts `from`, in declaration order.
    pub fn permitted(&self, from: ShipState) -> Vec<Operation> {
        self.rules
            .iter()
            .filter(|rule| rule.guard.check(&from))
            .map(|rule| rule.operation)
            .collect()
    }
}
