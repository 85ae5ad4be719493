//! Root application component: router, header, active page, footer.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::content::ORGANIZATION;
use crate::pages::{
    about::AboutPage, actions::ActionsPage, board::BoardPage, contact::ContactPage, home::HomePage,
    meetings::MeetingsPage,
};
use crate::router::provide_navigator_with;
use crate::state::route::Route;
use crate::util::fragment::BrowserFragment;

/// Root application component.
///
/// Owns the navigation state (through [`provide_navigator_with`]) and swaps the
/// page whenever the active route changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let nav = provide_navigator_with(BrowserFragment);

    view! {
        <Title text=move || format!("{} | {ORGANIZATION}", nav.route().label())/>

        <div class="site">
            <Header/>
            <div class="site__main">
                {move || match nav.route() {
                    Route::Home => view! { <HomePage/> }.into_any(),
                    Route::About => view! { <AboutPage/> }.into_any(),
                    Route::Board => view! { <BoardPage/> }.into_any(),
                    Route::Actions => view! { <ActionsPage/> }.into_any(),
                    Route::Meetings => view! { <MeetingsPage/> }.into_any(),
                    Route::Contact => view! { <ContactPage/> }.into_any(),
                }}
            </div>
            <Footer/>
        </div>
    }
}
