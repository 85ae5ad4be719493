//! The single source of truth for which page is displayed.
//!
//! DESIGN
//! ======
//! `NavigationState` owns the active [`Route`]. The address fragment is a
//! projection of it: `navigate` writes the fragment, and
//! `sync_from_fragment` reads it back. The echo of our own write re-applies
//! the route we just set, so the two never chase each other.
//!
//! Values that are not routes (hand-edited fragments, in-page anchors such as
//! `#action1`) leave the state untouched, both at startup and at runtime.

use crate::state::route::Route;
use crate::util::fragment::AddressFragment;

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Active page. Plain value; the app wraps it in an `RwSignal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Route,
}

impl NavigationState {
    /// Initial state for a raw fragment: its route if it names one, else `Home`.
    pub fn from_fragment(raw: &str) -> Self {
        let mut state = Self::default();
        state.sync_from_fragment(raw);
        state
    }

    pub fn current(self) -> Route {
        self.current
    }

    pub fn is_active(self, route: Route) -> bool {
        self.current == route
    }

    /// Switch to `target` and project it onto `fragment`.
    pub fn navigate(&mut self, target: Route, fragment: &impl AddressFragment) {
        self.current = target;
        fragment.write(target.fragment());
    }

    /// Adopt the route named by `raw`, ignoring anything else.
    ///
    /// Returns `true` when the active route changed.
    pub fn sync_from_fragment(&mut self, raw: &str) -> bool {
        let Ok(route) = Route::from_fragment(raw) else {
            return false;
        };
        let changed = self.current != route;
        self.current = route;
        changed
    }
}
