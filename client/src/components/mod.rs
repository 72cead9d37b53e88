//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one page section each. They receive state signals and
//! callbacks from the home page instead of reading shared context.

pub mod about;
pub mod contact_form;
pub mod cursor_dot;
pub mod footer;
pub mod grid_overlay;
pub mod hero;
pub mod nav_bar;
pub mod posts_list;
pub mod project_card;
pub mod project_gallery;
