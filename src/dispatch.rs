//! Port dispatcher: turns symbolic command names into ship operations.
//!
//! The dispatcher keeps no state. Command payloads are fixed: a `load`
//! always carries [`STANDARD_LOAD_TONS`] and a `navigate` always heads for
//! [`STANDARD_DESTINATION`].

use crate::ship::Vessel;
use crate::systems::CapacityExceeded;
use tracing::debug;

/// Tonnage loaded by the `load` command.
pub const STANDARD_LOAD_TONS: f64 = 100.0;

/// Destination used by the `navigate` command.
pub const STANDARD_DESTINATION: &str = "Port B";

/// Commands the port understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Load,
    Unload,
    Navigate,
}

impl Command {
    /// Parse a command name. Names are exact and case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Command::Start),
            "stop" => Some(Command::Stop),
            "load" => Some(Command::Load),
            "unload" => Some(Command::Unload),
            "navigate" => Some(Command::Navigate),
            _ => None,
        }
    }

    /// Run this command against `ship`.
    pub fn apply<V: Vessel + ?Sized>(self, ship: &mut V) -> Result<(), CapacityExceeded> {
        match self {
            Command::Start => ship.start(),
            Command::Stop => ship.stop(),
            Command::Load => ship.load_cargo(STANDARD_LOAD_TONS)?,
            Command::Unload => ship.unload_cargo(),
            Command::Navigate => ship.navigate_to(STANDARD_DESTINATION),
        }
        Ok(())
    }
}

/// Stateless entry point for port commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct PortDispatcher;

impl PortDispatcher {
    pub fn new() -> Self {
        PortDispatcher
    }

    /// Send a named command to `ship`.
    ///
    /// Unknown names are ignored. The only failure is a `load` the hold
    /// cannot take.
    pub fn send_command<V: Vessel + ?Sized>(
        &self,
        ship: &mut V,
        command: &str,
    ) -> Result<(), CapacityExceeded> {
        match Command::parse(command) {
            Some(cmd) => cmd.apply(ship),
            None => {
                debug!(ship = ship.identifier(), command, "ignoring unknown command");
                Ok(())
            }
        }
    }

    pub fn request_report<V: Vessel + ?Sized>(&self, ship: &V) -> String {
        ship.generate_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognises_the_five_commands() {
        assert_eq!(Command::parse("start"), Some(Command::Start));
        assert_eq!(Command::parse("stop"), Some(Command::Stop));
        assert_eq!(Command::parse("load"), Some(Command::Load));
        assert_eq!(Command::parse("unload"), Some(Command::Unload));
        assert_eq!(Command::parse("navigate"), Some(Command::Navigate));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for name in ["wait", "START", "", " start", "report"] {
            assert_eq!(Command::parse(name), None, "{name:?}");
        }
    }
}
