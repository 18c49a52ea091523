//! Loading / error / empty placeholders shared by list pages.

use leptos::prelude::*;

#[component]
pub fn LoadingNote(#[prop(into)] text: String) -> impl IntoView {
    view! { <p class="page__note">{text}</p> }
}

/// Inline error with a retry button.
#[component]
pub fn ErrorNote(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="page__error" role="alert">
            <p>{message}</p>
            <button class="btn" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}

/// Header shared by every signed-in page.
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="page__header">
            <h1>{title}</h1>
            <p class="page__subtitle">{subtitle}</p>
        </header>
    }
}
