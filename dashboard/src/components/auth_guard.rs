//! Route guard wrapper for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates [`souksync::guard::evaluate`] on every session signal change.
//! While the session resolves only a loading indicator renders; an anonymous
//! resolved session is sent to `/login`, replacing the history entry.

#[cfg(test)]
#[path = "auth_guard_test.rs"]
mod auth_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use souksync::guard::{self, GuardOutcome};
use souksync::SessionState;

use crate::state::session::use_session_state;

#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session_state();
    let outcome = Memo::new(move |_| guard::evaluate(&session.get()));
    install_guard_redirect(outcome, use_navigate());

    view! {
        <Show
            when=move || outcome.get() == GuardOutcome::Allow
            fallback=move || {
                view! {
                    <div class="auth-guard">
                        <p>{move || pending_message(outcome.get())}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Navigate whenever the guard decides to redirect.
pub fn install_guard_redirect<F>(outcome: Memo<GuardOutcome>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardOutcome::Redirect { to, replace } = outcome.get() {
            navigate(to, NavigateOptions { replace, ..NavigateOptions::default() });
        }
    });
}

fn pending_message(outcome: GuardOutcome) -> &'static str {
    match outcome {
        GuardOutcome::Pending => "Loading...",
        GuardOutcome::Redirect { .. } => "Redirecting to login...",
        GuardOutcome::Allow => "",
    }
}

/// True when the login page should bounce an already signed-in user home.
pub fn should_leave_login(state: &SessionState) -> bool {
    guard::evaluate(state) == GuardOutcome::Allow
}
