use super::*;
use crate::state::contact::{CONFIRMATION, ContactForm};
use crate::util::fragment::MemoryFragment;

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Amina".to_owned(),
        email: "amina@example.org".to_owned(),
        message: "Bonjour".to_owned(),
        status: None,
    }
}

// =============================================================
// Wiring
// =============================================================

#[test]
fn navigator_starts_from_current_fragment() {
    let owner = Owner::new();
    owner.with(|| {
        let nav = provide_navigator_with(MemoryFragment::new("#meetings"));
        assert_eq!(nav.route(), Route::Meetings);
    });
    owner.cleanup();
}

#[test]
fn navigator_ignores_invalid_startup_fragment() {
    let owner = Owner::new();
    owner.with(|| {
        let nav = provide_navigator_with(MemoryFragment::new("#nowhere"));
        assert_eq!(nav.route(), Route::Home);
    });
    owner.cleanup();
}

#[test]
fn navigator_is_provided_in_context() {
    let owner = Owner::new();
    owner.with(|| {
        let fragment = MemoryFragment::default();
        provide_navigator_with(fragment.clone());

        use_navigator().navigate(Route::About);
        assert_eq!(use_navigator().route(), Route::About);
        assert_eq!(fragment.read(), "#about");
    });
    owner.cleanup();
}

#[test]
fn navigate_then_external_edits_follow_route_rules() {
    let fragment = MemoryFragment::default();
    let owner = Owner::new();
    owner.with(|| {
        let nav = provide_navigator_with(fragment.clone());
        assert_eq!(nav.route(), Route::Home);

        nav.navigate(Route::Contact);
        assert_eq!(nav.route(), Route::Contact);
        assert_eq!(fragment.read(), "#contact");

        fragment.set_external("board");
        assert_eq!(nav.route(), Route::Board);

        fragment.set_external("unknown");
        assert_eq!(nav.route(), Route::Board);
        assert_eq!(fragment.read(), "#unknown");
    });
    owner.cleanup();
}

#[test]
fn history_steps_drive_the_route() {
    let fragment = MemoryFragment::default();
    let owner = Owner::new();
    owner.with(|| {
        let nav = provide_navigator_with(fragment.clone());
        nav.navigate(Route::About);
        nav.navigate(Route::Actions);

        assert!(fragment.back());
        assert_eq!(nav.route(), Route::About);
        assert!(fragment.forward());
        assert_eq!(nav.route(), Route::Actions);
    });
    owner.cleanup();
}

#[test]
fn in_page_anchor_keeps_current_route() {
    let fragment = MemoryFragment::default();
    let owner = Owner::new();
    owner.with(|| {
        let nav = provide_navigator_with(fragment.clone());
        nav.navigate(Route::Actions);

        fragment.set_external("#action2");
        assert_eq!(nav.route(), Route::Actions);

        nav.navigate(Route::Actions);
        assert_eq!(fragment.read(), "#actions");
        assert_eq!(nav.route(), Route::Actions);
    });
    owner.cleanup();
}

#[test]
fn cleanup_releases_fragment_listener() {
    let fragment = MemoryFragment::default();
    let owner = Owner::new();
    owner.with(|| {
        provide_navigator_with(fragment.clone());
    });
    assert_eq!(fragment.listener_count(), 1);

    owner.cleanup();
    assert_eq!(fragment.listener_count(), 0);

    // Nothing left to touch the disposed signal.
    fragment.set_external("board");
    assert_eq!(fragment.read(), "#board");
}

// =============================================================
// Page-local contact state
// =============================================================

#[test]
fn leaving_contact_page_discards_confirmation() {
    let fragment = MemoryFragment::new("#contact");
    let owner = Owner::new();
    owner.with(|| {
        let nav = provide_navigator_with(fragment.clone());

        // Each page is built under its own child owner, like the app's route switch.
        let page = Owner::new();
        let form = page.with(|| RwSignal::new(filled_form()));
        form.update(|f| f.submit().unwrap());
        assert_eq!(form.with_untracked(|f| f.status.clone()).as_deref(), Some(CONFIRMATION));

        nav.navigate(Route::Home);
        page.cleanup();
        assert!(form.try_get_untracked().is_none());
        assert_eq!(nav.route(), Route::Home);
    });
    owner.cleanup();
}
