//! Profile page: edit display name and preferred language.
//!
//! The form is prefilled from the session identity. After a successful save the
//! session reloads `/users/me` so the sidebar reflects the new name.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use souksync::ApiClient;
use souksync::api::types::{Language, ProfileUpdate, User};

use crate::components::status::PageHeader;
use crate::state::session::use_session_state;
use crate::util::load::PageScope;

pub const SAVED_MESSAGE: &str = "Profile updated successfully.";
pub const SAVE_FALLBACK: &str = "Failed to update profile";

/// Languages offered when `/languages` is unavailable.
pub fn default_languages() -> Vec<(String, String)> {
    [("en", "English"), ("am", "Amharic"), ("om", "Afaan Oromo")]
        .into_iter()
        .map(|(code, name)| (code.to_owned(), name.to_owned()))
        .collect()
}

/// Active languages as `(code, label)`, ordered by `sort_order`. An empty
/// catalogue falls back to the defaults.
pub fn language_options(mut catalogue: Vec<Language>) -> Vec<(String, String)> {
    catalogue.retain(|l| l.is_active);
    if catalogue.is_empty() {
        return default_languages();
    }
    catalogue.sort_by_key(|l| l.sort_order);
    catalogue.into_iter().map(|l| (l.code, l.name)).collect()
}

/// A blank name is omitted and left unchanged; the language is always sent.
pub fn profile_update(name: &str, language: &str) -> ProfileUpdate {
    let name = name.trim();
    ProfileUpdate {
        name: (!name.is_empty()).then(|| name.to_owned()),
        language_pref: Some(language.to_owned()),
    }
}

fn initial_fields(user: Option<&User>) -> (String, String) {
    let name = user.and_then(|u| u.name.clone()).unwrap_or_default();
    let language = user.and_then(|u| u.language_pref.clone()).unwrap_or_else(|| "en".to_owned());
    (name, language)
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Notice {
    Saved,
    Failed(String),
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let scope = PageScope::mount();
    let session_state = use_session_state();

    let (initial_name, initial_language) = initial_fields(session_state.get_untracked().user.as_ref());
    let name = RwSignal::new(initial_name);
    let language = RwSignal::new(initial_language);
    let languages = RwSignal::new(default_languages());
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    // A missing catalogue is not worth an error banner; keep the defaults.
    scope.run(
        |api: ApiClient| async move { api.languages().await },
        move |result| {
            if let Ok(list) = result {
                languages.set(language_options(list.items));
            }
        },
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        notice.set(None);
        let update = profile_update(&name.get_untracked(), &language.get_untracked());
        let session = scope.session().clone();
        scope.run(
            move |api: ApiClient| async move {
                let user = api.update_profile(&update).await?;
                session.refresh_user().await;
                Ok(user)
            },
            move |result| {
                saving.set(false);
                notice.set(Some(match result {
                    Ok(_) => Notice::Saved,
                    Err(e) => Notice::Failed(e.user_message(SAVE_FALLBACK)),
                }));
            },
        );
    };

    let phone = move || session_state.get().user.map(|u| u.phone).unwrap_or_default();
    let role = move || session_state.get().user.map(|u| u.role.label().to_owned()).unwrap_or_default();

    view! {
        <div class="profile-page">
            <PageHeader title="Profile" subtitle="Your account details and preferences."/>
            <form class="profile-form" on:submit=on_submit>
                <label class="profile-form__label">
                    "Phone"
                    <input class="profile-form__input" type="text" readonly prop:value=phone/>
                </label>
                <label class="profile-form__label">
                    "Role"
                    <input class="profile-form__input" type="text" readonly prop:value=role/>
                </label>
                <label class="profile-form__label">
                    "Name"
                    <input
                        class="profile-form__input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Language"
                    <select class="profile-form__input" on:change=move |ev| language.set(event_target_value(&ev))>
                        {move || {
                            languages
                                .get()
                                .into_iter()
                                .map(|(code, label)| {
                                    let current = code.clone();
                                    view! {
                                        <option value=code prop:selected=move || language.get() == current>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                {move || {
                    notice
                        .get()
                        .map(|n| match n {
                            Notice::Saved => view! { <p class="profile-form__ok">{SAVED_MESSAGE}</p> }.into_any(),
                            Notice::Failed(message) => {
                                view! { <p class="profile-form__error" role="alert">{message}</p> }.into_any()
                            }
                        })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
}
