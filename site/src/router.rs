//! Hash router: navigation state in a signal, kept in step with the address
//! fragment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell calls [`provide_navigator_with`] once, passing the browser
//! fragment. It seeds the state from the current fragment, subscribes to
//! fragment changes for the lifetime of the calling owner, and puts a
//! [`Navigator`] handle in context. Components read
//! the active route and request navigation through that handle only.

use leptos::prelude::*;

use crate::state::navigation::NavigationState;
use crate::state::route::Route;
use crate::util::fragment::{AddressFragment, SharedFragment};

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

/// Copyable handle over the navigation signal and the fragment it projects to.
#[derive(Clone, Copy)]
pub struct Navigator {
    state: RwSignal<NavigationState>,
    fragment: StoredValue<SharedFragment>,
}

impl Navigator {
    /// Active route (tracked).
    pub fn route(self) -> Route {
        self.state.get().current()
    }

    /// Show `target` and write it to the address fragment.
    ///
    /// No signal lock is held while writing, so a fragment that notifies
    /// synchronously can re-enter the listener safely.
    pub fn navigate(self, target: Route) {
        let fragment = self.fragment.get_value();
        let mut next = self.state.get_untracked();
        next.navigate(target, &fragment);
        if self.state.get_untracked() != next {
            self.state.set(next);
        }
    }
}

/// Set up routing for the current owner on `fragment` and provide the
/// [`Navigator`].
///
/// The fragment listener is released when the owner is cleaned up.
pub fn provide_navigator_with<F>(fragment: F) -> Navigator
where
    F: AddressFragment + Clone + Send + Sync + 'static,
{
    let fragment = SharedFragment::new(fragment);
    let state = RwSignal::new(NavigationState::from_fragment(&fragment.read()));
    leptos::logging::log!("initial route: {}", state.get_untracked().current());

    let source = fragment.clone();
    let subscription = fragment.subscribe(move || {
        let raw = source.read();
        let mut next = state.get_untracked();
        if next.sync_from_fragment(&raw) {
            state.set(next);
        } else if Route::from_fragment(&raw).is_err() {
            leptos::logging::log!("ignoring non-route fragment {raw:?}");
        }
    });
    on_cleanup(move || subscription.release());

    let navigator = Navigator {
        state,
        fragment: StoredValue::new(fragment),
    };
    provide_context(navigator);
    navigator
}

/// The [`Navigator`] provided by the app shell.
pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}
