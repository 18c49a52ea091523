//! Browser adapters for the core's storage and HTTP seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` persists the credential pair in `localStorage`; `fetch` sends API
//! requests through the browser's fetch via `gloo-net`.

#[cfg(feature = "hydrate")]
pub mod fetch;
pub mod storage;
