//! Injected time source.
//!
//! Audit entries, transition history and snapshots read the time only
//! through a [`Clock`], so tests can pin it.

use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::sync::Arc;

/// Source of the current wall-clock time.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always reports the same instant.
///
/// ```rust
/// use helmsman::core::{Clock, FixedClock};
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Shared handle to a clock, as held by the log and the ship.
pub type SharedClock = Arc<dyn Clock>;

/// The clock used when none is injected.
pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}
