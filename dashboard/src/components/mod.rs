//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap pages with the route guard and the signed-in chrome, reading
//! the session from Leptos context.

pub mod auth_guard;
pub mod layout;
pub mod status;
