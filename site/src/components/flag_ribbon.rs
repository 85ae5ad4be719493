//! Dual tricolour strip (French blue/white/red, Algerian green/white/red).

use leptos::prelude::*;

#[component]
pub fn FlagRibbon() -> impl IntoView {
    view! {
        <div class="flag-ribbon" aria-hidden="true">
            <div class="flag-ribbon__fr"></div>
            <div class="flag-ribbon__dz"></div>
        </div>
    }
}
