//! Section navigation followed by one article per entry.
//!
//! Shared by the Actions and Meetings pages.

use leptos::prelude::*;

use crate::components::pictures::Pictures;
use crate::components::section_nav::SectionNav;
use crate::content::{Article, FILLER};

#[component]
pub fn ArticleList(articles: &'static [Article]) -> impl IntoView {
    view! {
        <SectionNav items=articles/>
        {articles
            .iter()
            .map(|article| {
                view! {
                    <article id=article.id class="article">
                        <h3 class="article__title">{article.title}</h3>
                        <Pictures query=article.picture_query/>
                        <p class="article__body">{FILLER}</p>
                    </article>
                }
            })
            .collect_view()}
    }
}
