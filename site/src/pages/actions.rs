use leptos::prelude::*;

use crate::components::article_list::ArticleList;
use crate::content::ACTIONS;

#[component]
pub fn ActionsPage() -> impl IntoView {
    view! {
        <main class="page page--wide">
            <section>
                <h2 class="page__title">"Nos actions"</h2>
                <ArticleList articles=ACTIONS/>
            </section>
        </main>
    }
}
