//! Component-lifetime guard for spawned tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches and timers run as fire-and-forget `spawn_local` tasks. A component
//! creates a [`Liveness`], hands clones to its tasks and retires it from
//! `on_cleanup`; tasks check it before touching signals so a late response
//! after teardown is dropped.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "owner is still mounted" flag.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the owner as torn down. Idempotent.
    pub fn retire(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Pass `value` through only while the owner is alive.
    pub fn admit<T>(&self, value: T) -> Option<T> {
        self.is_alive().then_some(value)
    }
}
