//! Navigation: holds the current destination.

use serde::{Deserialize, Serialize};

/// Destination reported when no course is set.
pub const NO_DESTINATION: &str = "None";

/// Navigation capability the ship drives.
pub trait Navigator {
    fn current_destination(&self) -> &str;
    fn is_active(&self) -> bool;
    fn set_destination(&mut self, destination: &str);
    fn stop_navigation(&mut self);
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationSystem {
    current_destination: String,
    is_active: bool,
}

impl Default for NavigationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationSystem {
    pub fn new() -> Self {
        Self {
            current_destination: NO_DESTINATION.to_string(),
            is_active: false,
        }
    }
}

impl Navigator for NavigationSystem {
    fn current_destination(&self) -> &str {
        &self.current_destination
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    // Re-setting while active simply replaces the course.
    fn set_destination(&mut self, destination: &str) {
        self.current_destination = destination.to_string();
        self.is_active = true;
    }

    fn stop_navigation(&mut self) {
        self.current_destination = NO_DESTINATION.to_string();
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive_without_destination() {
        let nav = NavigationSystem::new();
        assert_eq!(nav.current_destination(), "None");
        assert!(!nav.is_active());
    }

    #[test]
    fn set_destination_activates() {
        let mut nav = NavigationSystem::new();
        nav.set_destination("Port B");

        assert_eq!(nav.current_destination(), "Port B");
        assert!(nav.is_active());
    }

    #[test]
    fn set_destination_replaces_active_course() {
        let mut nav = NavigationSystem::new();
        nav.set_destination("Port B");
        nav.set_destination("Port C");

        assert_eq!(nav.current_destination(), "Port C");
        assert!(nav.is_active());
    }

    #[test]
    fn stop_navigation_resets() {
        let mut nav = NavigationSystem::new();
        nav.set_destination("Port B");
        nav.stop_navigation();

        assert_eq!(nav.current_destination(), NO_DESTINATION);
        assert!(!nav.is_active());
    }
}
