use leptos::prelude::*;

use crate::content::{PICTURES_PER_ARTICLE, picture_url};

/// Three-up grid of placeholder pictures for an article keyword.
#[component]
pub fn Pictures(query: &'static str) -> impl IntoView {
    view! {
        <div class="pictures lap-grid-3">
            {(1..=PICTURES_PER_ARTICLE)
                .map(|index| {
                    view! {
                        <div class="pictures__frame">
                            <img src=picture_url(query, index) alt="illustration" class="pictures__img"/>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
