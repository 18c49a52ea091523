//! Utility helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `alive` tracks whether a page is still mounted; `load` runs one API fetch
//! into a signal and routes failures through the session.

pub mod alive;
pub mod load;
