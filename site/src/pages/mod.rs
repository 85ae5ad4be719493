//! Page modules, one per route.
//!
//! ARCHITECTURE
//! ============
//! Each page composes static content with `components`. Only the contact
//! page keeps local state.

pub mod about;
pub mod actions;
pub mod board;
pub mod contact;
pub mod home;
pub mod meetings;
