//! Browser-facing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates `web-sys` access so state and components stay testable off the
//! browser.

pub mod fragment;
