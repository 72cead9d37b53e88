//! Client-side state containers.
//!
//! ARCHITECTURE
//! ============
//! Each container is a plain struct with pure transition methods. The
//! composition root wraps them in signals and passes them down together with
//! callbacks, so components never reach for ambient globals.

pub mod contact;
pub mod nav;
pub mod posts;
pub mod projects;
pub mod theme;
pub mod ui;
