//! # cercle-site
//!
//! Leptos + WASM single-page site for the Cercle Emir Abdelkader.
//!
//! Six static pages behind a hash router: the active page is held in one
//! signal and mirrored to the address fragment, so pages are bookmarkable and
//! back/forward works. Build with the `csr` feature (Trunk does this) to wire
//! it to the browser; the default build is browser-inert and runs the tests.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;
