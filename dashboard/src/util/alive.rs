//! Mount-lifetime flag for async page work.
//!
//! A fetch spawned by a page must not write into signals after the page
//! unmounts. Pages capture an [`AliveFlag`], the owner's cleanup clears it, and
//! the task checks it before committing.

#[cfg(test)]
#[path = "alive_test.rs"]
mod alive_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl AliveFlag {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Flag cleared when the current reactive owner is cleaned up.
#[must_use]
pub fn alive_until_cleanup() -> AliveFlag {
    let flag = AliveFlag::new();
    let on_drop = flag.clone();
    leptos::prelude::on_cleanup(move || on_drop.clear());
    flag
}
