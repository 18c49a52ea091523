//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` drives the session's OTP flow. The rest render behind the route
//! guard and load their data through `util::load::PageScope`.

pub mod credit;
pub mod dashboard;
pub mod inventory;
pub mod login;
pub mod orders;
pub mod profile;
