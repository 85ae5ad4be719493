//! Open/closed state of the header's small-screen menu.

use crate::state::route::Route;

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

/// Header-local dropdown state, independent of the active route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Dismiss without navigating (backdrop click).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick a route from the menu: always closes it and always navigates.
    pub fn select(&mut self, target: Route, navigate: impl FnOnce(Route)) {
        self.open = false;
        navigate(target);
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(self) -> &'static str {
        if self.open { "Fermer le menu" } else { "Ouvrir le menu" }
    }
}
