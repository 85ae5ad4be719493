//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Header and footer read the navigator from context; the rest are stateless
//! and render the static content handed to them.

pub mod article_list;
pub mod flag_ribbon;
pub mod footer;
pub mod header;
pub mod member_card;
pub mod nav_link;
pub mod pictures;
pub mod section_nav;
