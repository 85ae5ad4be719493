use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn counter(fragment: &MemoryFragment) -> (Arc<AtomicUsize>, Subscription) {
    let hits = Arc::new(AtomicUsize::new(0));
    let sub = fragment.subscribe({
        let hits = Arc::clone(&hits);
        move || {
            hits.fetch_add(1, Ordering::SeqCst);
        }
    });
    (hits, sub)
}

// =============================================================
// MemoryFragment read/write
// =============================================================

#[test]
fn memory_fragment_default_is_empty() {
    assert_eq!(MemoryFragment::default().read(), "");
}

#[test]
fn memory_fragment_write_prefixes_hash() {
    let fragment = MemoryFragment::default();
    fragment.write("contact");
    assert_eq!(fragment.read(), "#contact");
}

#[test]
fn memory_fragment_clones_share_state() {
    let fragment = MemoryFragment::new("#about");
    let other = fragment.clone();
    other.write("board");
    assert_eq!(fragment.read(), "#board");
}

// =============================================================
// Change notification
// =============================================================

#[test]
fn write_notifies_listeners_only_on_change() {
    let fragment = MemoryFragment::new("#home");
    let (hits, _sub) = counter(&fragment);

    fragment.write("home");
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    fragment.write("about");
    fragment.set_external("#unknown");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn listener_can_read_fragment_during_notification() {
    let fragment = MemoryFragment::default();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let _sub = fragment.subscribe({
        let fragment = fragment.clone();
        let seen = Arc::clone(&seen);
        move || seen.lock().unwrap().push(fragment.read())
    });

    fragment.write("meetings");
    assert_eq!(*seen.lock().unwrap(), vec!["#meetings".to_owned()]);
}

#[test]
fn released_subscription_stops_notifications() {
    let fragment = MemoryFragment::default();
    let (hits, sub) = counter(&fragment);
    assert_eq!(fragment.listener_count(), 1);

    sub.release();
    assert_eq!(fragment.listener_count(), 0);

    fragment.write("board");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn dropped_subscription_unsubscribes() {
    let fragment = MemoryFragment::default();
    {
        let (_hits, _sub) = counter(&fragment);
        assert_eq!(fragment.listener_count(), 1);
    }
    assert_eq!(fragment.listener_count(), 0);
}

#[test]
fn releasing_one_subscription_keeps_others() {
    let fragment = MemoryFragment::default();
    let (first_hits, first) = counter(&fragment);
    let (second_hits, _second) = counter(&fragment);

    drop(first);
    fragment.write("about");

    assert_eq!(first_hits.load(Ordering::SeqCst), 0);
    assert_eq!(second_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn inert_subscription_release_is_a_no_op() {
    let sub = Subscription::inert();
    assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
    sub.release();
}

// =============================================================
// History
// =============================================================

#[test]
fn back_and_forward_walk_history_and_notify() {
    let fragment = MemoryFragment::new("");
    fragment.write("about");
    fragment.write("board");
    let (hits, _sub) = counter(&fragment);

    assert!(fragment.back());
    assert_eq!(fragment.read(), "#about");
    assert!(fragment.back());
    assert_eq!(fragment.read(), "");
    assert!(!fragment.back());

    assert!(fragment.forward());
    assert_eq!(fragment.read(), "#about");
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[test]
fn write_after_back_discards_forward_entries() {
    let fragment = MemoryFragment::new("#home");
    fragment.write("about");
    fragment.write("board");
    fragment.back();

    fragment.write("contact");
    assert!(!fragment.forward());
    assert!(fragment.back());
    assert_eq!(fragment.read(), "#about");
}

// =============================================================
// BrowserFragment (native build)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_fragment_is_inert_without_csr() {
    let fragment = BrowserFragment;
    fragment.write("contact");
    assert_eq!(fragment.read(), "");
    let sub = fragment.subscribe(|| {});
    assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
}
