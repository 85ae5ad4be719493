//! Address-fragment access behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The fragment (`#home`, `#contact`, ...) is the externally observable
//! projection of the active page. The router reads it once at startup,
//! writes it on every navigation, and listens for changes made by anything
//! else (address bar edits, back/forward, in-page anchors).
//!
//! `BrowserFragment` talks to `window.location` and the `hashchange` event
//! when built with `csr`; without it every call is inert so the crate stays
//! buildable and testable natively. `MemoryFragment` is a self-contained
//! stand-in with history, used by tests. `SharedFragment` erases either one
//! so the router can hold it in a signal-friendly handle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

/// Read/write/observe access to the address fragment.
pub trait AddressFragment {
    /// Current raw fragment, including the leading `#` when present.
    fn read(&self) -> String;

    /// Replace the fragment with `value` (without the leading `#`).
    fn write(&self, value: &str);

    /// Invoke `on_change` whenever the fragment changes, by any means.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// released or dropped.
    fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static;
}

/// Registration handle for a fragment listener; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A handle with nothing to release.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Unsubscribe now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

// =============================================================================
// SHARED
// =============================================================================

trait ErasedFragment: Send + Sync {
    fn read(&self) -> String;
    fn write(&self, value: &str);
    fn subscribe_boxed(&self, on_change: Box<dyn Fn() + Send + Sync>) -> Subscription;
}

impl<T> ErasedFragment for T
where
    T: AddressFragment + Send + Sync,
{
    fn read(&self) -> String {
        AddressFragment::read(self)
    }

    fn write(&self, value: &str) {
        AddressFragment::write(self, value);
    }

    fn subscribe_boxed(&self, on_change: Box<dyn Fn() + Send + Sync>) -> Subscription {
        AddressFragment::subscribe(self, move || on_change())
    }
}

/// Cheaply clonable, type-erased [`AddressFragment`].
#[derive(Clone)]
pub struct SharedFragment {
    inner: Arc<dyn ErasedFragment>,
}

impl SharedFragment {
    pub fn new(fragment: impl AddressFragment + Send + Sync + 'static) -> Self {
        Self { inner: Arc::new(fragment) }
    }
}

impl std::fmt::Debug for SharedFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedFragment").field("current", &self.inner.read()).finish()
    }
}

impl AddressFragment for SharedFragment {
    fn read(&self) -> String {
        self.inner.read()
    }

    fn write(&self, value: &str) {
        self.inner.write(value);
    }

    fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.subscribe_boxed(Box::new(on_change))
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.location.hash` plus the window `hashchange` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFragment;

impl AddressFragment for BrowserFragment {
    fn read(&self) -> String {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn write(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.location().set_hash(value) {
                leptos::logging::warn!("failed to set location hash to {value:?}: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }

    fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        #[cfg(feature = "csr")]
        {
            let handle = leptos::prelude::window_event_listener(leptos::ev::hashchange, move |_| on_change());
            Subscription::new(move || handle.remove())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = on_change;
            Subscription::inert()
        }
    }
}

// =============================================================================
// MEMORY
// =============================================================================

type Listener = Arc<dyn Fn() + Send + Sync>;

struct MemoryInner {
    history: Vec<String>,
    cursor: usize,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// In-memory fragment with a linear history, shared between clones.
///
/// Change notification fires only when the value actually changes, like the
/// browser's `hashchange`.
#[derive(Clone)]
pub struct MemoryFragment {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryFragment {
    /// Start with `initial` as the raw fragment (e.g. `""` or `"#board"`).
    pub fn new(initial: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryInner {
                history: vec![initial.to_owned()],
                cursor: 0,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Simulate the user editing the address bar.
    pub fn set_external(&self, value: &str) {
        self.push(value);
    }

    /// Step back in history. Returns `false` at the oldest entry.
    pub fn back(&self) -> bool {
        let moved = {
            let mut inner = lock(&self.inner);
            if inner.cursor == 0 {
                false
            } else {
                inner.cursor -= 1;
                true
            }
        };
        if moved {
            self.notify();
        }
        moved
    }

    /// Step forward in history. Returns `false` at the newest entry.
    pub fn forward(&self) -> bool {
        let moved = {
            let mut inner = lock(&self.inner);
            if inner.cursor + 1 >= inner.history.len() {
                false
            } else {
                inner.cursor += 1;
                true
            }
        };
        if moved {
            self.notify();
        }
        moved
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    fn push(&self, value: &str) {
        let raw = if value.is_empty() || value.starts_with('#') {
            value.to_owned()
        } else {
            format!("#{value}")
        };
        let changed = {
            let mut inner = lock(&self.inner);
            if inner.history[inner.cursor] == raw {
                false
            } else {
                let keep = inner.cursor + 1;
                inner.history.truncate(keep);
                inner.history.push(raw);
                inner.cursor = keep;
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    fn notify(&self) {
        // Listeners may read the fragment, so call them without the lock held.
        let listeners: Vec<Listener> = lock(&self.inner)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl Default for MemoryFragment {
    fn default() -> Self {
        Self::new("")
    }
}

impl AddressFragment for MemoryFragment {
    fn read(&self) -> String {
        let inner = lock(&self.inner);
        inner.history[inner.cursor].clone()
    }

    fn write(&self, value: &str) {
        self.push(value);
    }

    fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Arc::new(on_change)));
            id
        };
        let weak: Weak<Mutex<MemoryInner>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).listeners.retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}

fn lock(inner: &Mutex<MemoryInner>) -> MutexGuard<'_, MemoryInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
