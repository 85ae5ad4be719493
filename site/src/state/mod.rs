//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain value type with its transitions; components wrap
//! them in Leptos signals. Keeping them signal-free lets the rules be tested
//! natively.

pub mod contact;
pub mod mobile_menu;
pub mod navigation;
pub mod route;
