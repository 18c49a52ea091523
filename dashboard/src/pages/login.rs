//! Login page: phone number, then one-time code.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use souksync::routes::HOME_PATH;

use crate::components::auth_guard::should_leave_login;
use crate::state::session::{use_session, use_session_state};

/// Country prefix pre-filled in the phone field.
pub const PHONE_PREFIX: &str = "+251";
const SUBSCRIBER_DIGITS: usize = 9;
pub const CODE_LEN: usize = 6;

const PHONE_HINT: &str = "Enter a phone number like +251 9XX XXX XXX.";
const CODE_HINT: &str = "Enter the 6-digit code.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginStep {
    Phone,
    Code,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let state = use_session_state();
    let navigate = use_navigate();

    let step = RwSignal::new(LoginStep::Phone);
    let phone = RwSignal::new(PHONE_PREFIX.to_owned());
    let code = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if should_leave_login(&state.get()) {
            navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let busy = move || state.get().is_loading;

    let request_session = session.clone();
    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        request_session.clear_error();
        let phone_value = match validate_phone(&phone.get()) {
            Ok(p) => p,
            Err(msg) => {
                hint.set(Some(msg));
                return;
            }
        };
        hint.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = request_session.clone();
            leptos::task::spawn_local(async move {
                if session.request_otp(&phone_value).await.is_ok() {
                    step.set(LoginStep::Code);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = phone_value;
    };

    let verify_session = session.clone();
    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        verify_session.clear_error();
        let checked = validate_phone(&phone.get()).and_then(|p| validate_code(&code.get()).map(|c| (p, c)));
        let (phone_value, code_value) = match checked {
            Ok(pair) => pair,
            Err(msg) => {
                hint.set(Some(msg));
                return;
            }
        };
        hint.set(None);

        // Success flips the session to authenticated and the effect above navigates.
        #[cfg(feature = "hydrate")]
        {
            let session = verify_session.clone();
            leptos::task::spawn_local(async move {
                let _ = session.verify_otp(&phone_value, &code_value).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (phone_value, code_value);
    };

    let change_session = session;
    let on_change_phone = move |_| {
        step.set(LoginStep::Phone);
        code.set(String::new());
        hint.set(None);
        change_session.clear_error();
    };

    let message = move || hint.get().map(str::to_owned).or_else(|| state.get().error);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Souk" <span class="login-card__accent">"Sync"</span></h1>
                <p class="login-card__subtitle">
                    {move || match step.get() {
                        LoginStep::Phone => "Enter your phone number to receive an OTP".to_owned(),
                        LoginStep::Code => format!("We sent a code to {}", phone.get()),
                    }}
                </p>
                <Show when=move || message().is_some()>
                    <p class="login-message" role="alert">{move || message().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || step.get() == LoginStep::Phone
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_verify_code.clone()>
                                <input
                                    class="login-input login-input--code"
                                    type="text"
                                    inputmode="numeric"
                                    autocomplete="one-time-code"
                                    maxlength="6"
                                    placeholder="000000"
                                    prop:value=move || code.get()
                                    on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
                                />
                                <button
                                    class="login-button"
                                    type="submit"
                                    disabled=move || busy() || code.get().len() != CODE_LEN
                                >
                                    {move || if busy() { "Verifying..." } else { "Verify & Sign in" }}
                                </button>
                                <button class="login-link" type="button" on:click=on_change_phone.clone()>
                                    "Change phone number"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_request_code.clone()>
                        <input
                            class="login-input"
                            type="tel"
                            autocomplete="tel"
                            placeholder="+251 9XX XXX XXX"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=busy>
                            {move || if busy() { "Sending..." } else { "Send OTP" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

/// Strip everything but a leading `+` and digits.
pub fn normalize_phone_input(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(char::is_ascii_digit));
    out
}

/// Accept `+251` followed by nine digits, ignoring spaces and dashes.
pub fn validate_phone(raw: &str) -> Result<String, &'static str> {
    let phone = normalize_phone_input(raw);
    let valid = phone
        .strip_prefix(PHONE_PREFIX)
        .is_some_and(|rest| rest.len() == SUBSCRIBER_DIGITS);
    if valid { Ok(phone) } else { Err(PHONE_HINT) }
}

/// Keep digits only, at most [`CODE_LEN`] of them.
pub fn normalize_code_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(CODE_LEN).collect()
}

pub fn validate_code(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim();
    if code.len() == CODE_LEN && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(code.to_owned())
    } else {
        Err(CODE_HINT)
    }
}
