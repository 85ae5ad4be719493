//! Site footer: blurb, secondary navigation, contact details, copyright.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::components::flag_ribbon::FlagRibbon;
use crate::content::{CITY, EMAIL, ORGANIZATION, TAGLINE, mailto};
use crate::router::use_navigator;
use crate::state::route::Route;

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {ORGANIZATION} — Tous droits réservés.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let nav = use_navigator();
    let year = OffsetDateTime::now_utc().year();

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div>
                    <h3 class="site-footer__heading">{ORGANIZATION}</h3>
                    <p class="site-footer__text">{TAGLINE}</p>
                </div>

                <div>
                    <h3 class="site-footer__heading">"Navigation"</h3>
                    <ul class="site-footer__links">
                        {Route::ALL
                            .into_iter()
                            .map(|route| {
                                view! {
                                    <li>
                                        <a
                                            href=route.href()
                                            class="site-footer__link"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                nav.navigate(route);
                                            }
                                        >
                                            {route.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class="site-footer__heading">"Coordonnées"</h3>
                    <address class="site-footer__address">
                        <p>{ORGANIZATION}</p>
                        <p>{CITY}</p>
                        <p>
                            "Email: "
                            <a class="site-footer__mail" href=mailto()>{EMAIL}</a>
                        </p>
                    </address>
                </div>
            </div>
            <FlagRibbon/>
            <div class="site-footer__copyright">{copyright_line(year)}</div>
        </footer>
    }
}
