//! "Le bureau": member roster.

use leptos::prelude::*;

use crate::components::member_card::MemberCard;
use crate::content::BOARD;

#[component]
pub fn BoardPage() -> impl IntoView {
    view! {
        <main class="page page--wide">
            <section>
                <h2 class="page__title">"Le bureau"</h2>
                <p class="page__subtitle">"Trombinoscope de l'association."</p>
                <div class="member-grid">
                    {BOARD.iter().map(|member| view! { <MemberCard member=*member/> }).collect_view()}
                </div>
            </section>
        </main>
    }
}
