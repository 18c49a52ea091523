//! Signed-in chrome: sidebar navigation, identity, logout.

use leptos::prelude::*;
use leptos_router::components::A;
use souksync::routes::AppRoute;

use crate::state::session::{use_session, use_session_state};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_session();
    let state = use_session_state();

    let identity = move || {
        state
            .get()
            .user
            .map(|u| (u.display_name().to_owned(), u.role.label().to_owned()))
            .unwrap_or_default()
    };

    // The guard observes the cleared session and redirects to /login.
    let on_logout = move |_| session.logout();

    view! {
        <div class="layout">
            <aside class="layout__sidebar">
                <div class="layout__brand">"Souk" <span class="layout__brand-accent">"Sync"</span></div>
                <nav class="layout__nav">
                    {AppRoute::NAV
                        .into_iter()
                        .map(|route| {
                            view! {
                                <A href=route.path() attr:class="layout__nav-link">
                                    {route.nav_label()}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="layout__self">
                    <span class="layout__self-name">{move || identity().0}</span>
                    <span class="layout__self-role">{move || identity().1}</span>
                    <button class="btn layout__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
