//! Session context for the browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The [`SessionManager`] owns the session rules; components read a
//! `RwSignal<SessionState>` mirror of it so Leptos tracks changes. A hydrate-only
//! task forwards every watch-channel update into the signal, and bootstrap is
//! started once per page load. During SSR the signal stays in its initial
//! loading state, which matches what hydration first renders.

use std::sync::Arc;

use leptos::prelude::*;
use souksync::api::HttpTransport;
use souksync::{ApiClient, ClientConfig, SessionManager, SessionState};

use crate::net::storage::LocalStorageTokenStore;

/// Build the session, publish both contexts, and start bootstrap in the browser.
pub fn provide_session() {
    let manager = SessionManager::new(build_client());
    let state = RwSignal::new(manager.state());

    #[cfg(feature = "hydrate")]
    {
        let mut updates = manager.subscribe();
        leptos::task::spawn_local(async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                state.set(next);
            }
        });

        let boot = manager.clone();
        leptos::task::spawn_local(async move {
            boot.bootstrap().await;
        });
    }

    provide_context(manager);
    provide_context(state);
}

/// Session manager from context.
pub fn use_session() -> SessionManager {
    expect_context::<SessionManager>()
}

/// Reactive session snapshot from context.
pub fn use_session_state() -> RwSignal<SessionState> {
    expect_context::<RwSignal<SessionState>>()
}

fn build_client() -> ApiClient {
    ApiClient::new(ClientConfig::from_build_env(), transport(), Arc::new(LocalStorageTokenStore))
}

#[cfg(feature = "hydrate")]
fn transport() -> Arc<dyn HttpTransport> {
    Arc::new(crate::net::fetch::FetchTransport)
}

#[cfg(not(feature = "hydrate"))]
fn transport() -> Arc<dyn HttpTransport> {
    Arc::new(souksync::api::ReqwestTransport::new())
}
