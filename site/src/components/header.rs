//! Sticky site header: brand, route navigation, and the small-screen menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header reads the active route from the navigator and marks exactly one
//! entry active. It owns the mobile menu state; picking an entry from that
//! menu closes it and navigates in the same handler.

use leptos::prelude::*;

use crate::components::flag_ribbon::FlagRibbon;
use crate::components::nav_link::NavLink;
use crate::content::{LEGAL_FORM, LOGO, ORGANIZATION};
use crate::router::use_navigator;
use crate::state::mobile_menu::MobileMenu;
use crate::state::route::Route;

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// One navigation entry as rendered for a given active route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub active: bool,
}

/// Navigation entries in display order, with `current` marked active.
pub fn nav_items(current: Route) -> [NavItem; 6] {
    Route::ALL.map(|route| NavItem {
        route,
        label: route.label(),
        active: route == current,
    })
}

#[component]
pub fn Header() -> impl IntoView {
    let nav = use_navigator();
    let menu = RwSignal::new(MobileMenu::default());

    let on_toggle = move |_| menu.update(MobileMenu::toggle);
    let on_dismiss = move |_| menu.update(MobileMenu::close);
    let on_pick = move |route: Route| menu.update(|m| m.select(route, |r| nav.navigate(r)));

    view! {
        <header class="site-header">
            <FlagRibbon/>
            <div class="site-header__inner">
                <div class="site-header__brand">
                    <img src=LOGO alt=format!("Logo {ORGANIZATION}") class="site-header__logo"/>
                    <div class="site-header__titles">
                        <div class="site-header__name">{ORGANIZATION}</div>
                        <div class="site-header__legal">{LEGAL_FORM}</div>
                    </div>
                </div>

                <nav aria-label="Navigation principale" class="site-header__nav lt-lap-hidden ge-lap-flex">
                    {move || {
                        nav_items(nav.route())
                            .into_iter()
                            .map(|item| view! { <NavLink item=item/> })
                            .collect_view()
                    }}
                </nav>

                <div class="site-header__burger lt-lap-flex ge-lap-hidden">
                    <button
                        class="site-header__toggle"
                        on:click=on_toggle
                        aria-label=move || menu.get().toggle_label()
                        aria-expanded=move || menu.get().is_open().to_string()
                    >
                        <Show when=move || menu.get().is_open() fallback=|| view! { <MenuIcon/> }>
                            <CloseIcon/>
                        </Show>
                    </button>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div class="site-header__overlay ge-lap-hidden" on:click=on_dismiss></div>
                    <div class="site-header__dropdown ge-lap-hidden">
                        {Route::ALL
                            .into_iter()
                            .map(|route| {
                                view! {
                                    <button class="site-header__dropdown-item" on:click=move |_| on_pick(route)>
                                        {route.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="icon">
            <path d="M3 6h18v2H3z"/>
            <path d="M3 11h18v2H3z"/>
            <path d="M3 16h18v2H3z"/>
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="icon">
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M18.3 5.7a1 1 0 0 1 0 1.4L13.4 12l4.9 4.9a1 1 0 1 1-1.4 1.4L12 13.4l-4.9 4.9a1 1 0 0 1-1.4-1.4L10.6 12 5.7 7.1A1 1 0 1 1 7.1 5.7L12 10.6l4.9-4.9a1 1 0 0 1 1.4 0z"
            />
        </svg>
    }
}
