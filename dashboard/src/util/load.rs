//! Page-scoped API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page fetch follows the same steps: spawn on the browser task queue,
//! await the API client, route failures through the session (a 401 logs out
//! and the guard redirects), then commit unless the page has unmounted or a
//! newer load has started. [`PageScope`] holds what those steps need.
//!
//! A scope tracks one reloadable resource: every [`PageScope::load`] bumps its
//! generation, and only the latest load may commit. [`PageScope::run`] calls
//! (form submits, row actions) are not generation-gated.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use souksync::{ApiClient, ApiError, SessionManager};

use crate::state::session::use_session;
use crate::util::alive::{AliveFlag, alive_until_cleanup};

/// Render state of one fetched resource.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.user_message(fallback)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Session, mount flag and load generation for one page instance.
#[derive(Clone)]
pub struct PageScope {
    session: SessionManager,
    alive: AliveFlag,
    generation: Arc<AtomicU64>,
}

impl PageScope {
    /// Scope tied to the current component's lifetime.
    pub fn mount() -> Self {
        Self::new(use_session(), alive_until_cleanup())
    }

    pub fn new(session: SessionManager, alive: AliveFlag) -> Self {
        Self { session, alive, generation: Arc::new(AtomicU64::new(0)) }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Show a finished call's failure to the session, then gate the commit:
    /// `None` once unmounted. A late 401 still ends the session.
    pub fn settle<T>(&self, result: Result<T, ApiError>) -> Option<Result<T, ApiError>> {
        if let Err(e) = &result {
            self.session.observe_error(e);
        }
        self.alive.is_alive().then_some(result)
    }

    /// Start a new load; earlier tickets become stale.
    pub fn next_ticket(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// [`PageScope::settle`], additionally dropping results of superseded loads.
    pub fn settle_latest<T>(&self, ticket: u64, result: Result<T, ApiError>) -> Option<Result<T, ApiError>> {
        let settled = self.settle(result)?;
        self.is_latest(ticket).then_some(settled)
    }

    /// Run `call` against the API client and hand the settled result to `done`.
    pub fn run<T, F, Fut, D>(&self, call: F, done: D)
    where
        T: 'static,
        F: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        D: FnOnce(Result<T, ApiError>) + 'static,
    {
        self.spawn(None, call, done);
    }

    /// Reset `target` to loading and fill it from `call`, unless a newer load
    /// on this scope finishes the job first.
    pub fn load<T, F, Fut>(&self, target: RwSignal<LoadState<T>>, fallback: &'static str, call: F)
    where
        T: Send + Sync + 'static,
        F: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let ticket = self.next_ticket();
        target.set(LoadState::Loading);
        self.spawn(Some(ticket), call, move |result| target.set(LoadState::from_result(result, fallback)));
    }

    fn spawn<T, F, Fut, D>(&self, ticket: Option<u64>, call: F, done: D)
    where
        T: 'static,
        F: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        D: FnOnce(Result<T, ApiError>) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let scope = self.clone();
            leptos::task::spawn_local(async move {
                let result = call(scope.session.api().clone()).await;
                let settled = match ticket {
                    Some(ticket) => scope.settle_latest(ticket, result),
                    None => scope.settle(result),
                };
                if let Some(result) = settled {
                    done(result);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, call, done);
        }
    }
}
