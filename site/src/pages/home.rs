//! Landing page: headline, calls to action, group photo.

use leptos::prelude::*;

use crate::content::{GROUP_PHOTO, ORGANIZATION};
use crate::router::use_navigator;
use crate::state::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <main class="page page--wide">
            <section class="hero lap-grid-2">
                <div>
                    <div class="hero__badge">"France"</div>
                    <h1 class="hero__title">"Nous rassemblons les élus français et algériens."</h1>
                    <p class="hero__lead">
                        "Le Cercle Emir Abdelkader rassemble les élus français et algériens pour favoriser les synergies entre nos pays."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--primary" on:click=move |_| nav.navigate(Route::About)>
                            "En savoir plus " <span aria-hidden="true">"→"</span>
                        </button>
                        <a
                            href=Route::Contact.href()
                            class="btn btn--outline"
                            on:click=move |ev| {
                                ev.prevent_default();
                                nav.navigate(Route::Contact);
                            }
                        >
                            "Nous contacter"
                        </a>
                    </div>
                </div>

                <div class="hero__photo">
                    <div class="hero__glow hero__glow--fr" aria-hidden="true"></div>
                    <div class="hero__glow hero__glow--dz" aria-hidden="true"></div>
                    <div class="hero__frame">
                        <img src=GROUP_PHOTO alt=format!("Photo de groupe — {ORGANIZATION}") class="hero__img"/>
                    </div>
                </div>
            </section>
        </main>
    }
}
