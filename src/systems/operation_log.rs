//! Append-only audit trail of ship operations.

use crate::core::{system_clock, Clock, SharedClock};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One audit line. Renders as `"{timestamp}: {message}"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.timestamp, self.message)
    }
}

/// Audit log capability the ship writes to.
pub trait Logbook {
    /// Entries in the order they were written.
    fn entries(&self) -> &[LogEntry];
    fn log(&mut self, message: &str);
    fn clear(&mut self);

    /// Messages without their timestamps.
    fn messages(&self) -> Vec<&str> {
        self.entries().iter().map(|e| e.message.as_str()).collect()
    }
}

/// In-memory operation log stamped by an injected clock.
#[derive(Clone, Debug)]
pub struct OperationLog {
    entries: Vec<LogEntry>,
    clock: SharedClock,
}

impl Default for OperationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationLog {
    /// Log stamped with the system clock.
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Rendered lines, `"{timestamp}: {message}"`.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl Logbook for OperationLog {
    fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    fn log(&mut self, message: &str) {
        self.entries.push(LogEntry {
            timestamp: self.clock.now(),
            message: message.to_string(),
        });
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
