//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and cosmetic
//! animation logic from page and component code to improve testability.

pub mod liveness;
pub mod markdown;
pub mod platform;
pub mod typewriter;
