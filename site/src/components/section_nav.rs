//! Row of in-page anchor links to the articles below it.
//!
//! These anchors set the fragment to an article id, which the router ignores,
//! so the page stays put and the browser scrolls to the article.

use leptos::prelude::*;

use crate::content::Article;

#[component]
pub fn SectionNav(items: &'static [Article]) -> impl IntoView {
    view! {
        <div class="section-nav">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <a href=format!("#{}", item.id) class="section-nav__link">
                            {item.title}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
