//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use souksync::routes::HOME_PATH;

use crate::components::auth_guard::AuthGuard;
use crate::components::layout::Layout;
use crate::pages::{
    credit::CreditPage, dashboard::DashboardPage, inventory::InventoryPage, login::LoginPage, orders::OrdersPage,
    profile::ProfilePage,
};
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session contexts and sets up client-side routing. Every route
/// except `/login` renders inside [`AuthGuard`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/souksync-dashboard.css"/>
        <Title text="SoukSync"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                <Route path=StaticSegment("dashboard") view=|| protected(DashboardPage)/>
                <Route path=StaticSegment("inventory") view=|| protected(InventoryPage)/>
                <Route path=StaticSegment("orders") view=|| protected(OrdersPage)/>
                <Route path=StaticSegment("credit") view=|| protected(CreditPage)/>
                <Route path=StaticSegment("profile") view=|| protected(ProfilePage)/>
            </Routes>
        </Router>
    }
}

fn protected<V, F>(page: F) -> impl IntoView
where
    F: Fn() -> V + Copy + Send + Sync + 'static,
    V: IntoView + 'static,
{
    view! {
        <AuthGuard>
            <Layout>{page()}</Layout>
        </AuthGuard>
    }
}
