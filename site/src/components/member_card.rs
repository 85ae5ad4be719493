use leptos::prelude::*;

use crate::content::Member;

/// Photo, name and role of one board member.
#[component]
pub fn MemberCard(member: Member) -> impl IntoView {
    view! {
        <div class="member-card">
            <img src=member.photo alt=member.name class="member-card__photo"/>
            <div class="member-card__name">{member.name}</div>
            <div class="member-card__role">{member.role}</div>
        </div>
    }
}
