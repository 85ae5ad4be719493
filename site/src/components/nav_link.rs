//! Header navigation button.

use leptos::prelude::*;

use crate::components::header::NavItem;
use crate::router::use_navigator;

/// One entry of the desktop navigation bar.
#[component]
pub fn NavLink(item: NavItem) -> impl IntoView {
    let nav = use_navigator();
    let class = if item.active { "nav-link nav-link--active" } else { "nav-link" };

    view! {
        <button
            class=class
            aria-current=item.active.then_some("page")
            on:click=move |_| nav.navigate(item.route)
        >
            {item.label}
        </button>
    }
}
