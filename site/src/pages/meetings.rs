use leptos::prelude::*;

use crate::components::article_list::ArticleList;
use crate::content::MEETINGS;

#[component]
pub fn MeetingsPage() -> impl IntoView {
    view! {
        <main class="page page--wide">
            <section>
                <h2 class="page__title">"Nos rencontres"</h2>
                <ArticleList articles=MEETINGS/>
            </section>
        </main>
    }
}
