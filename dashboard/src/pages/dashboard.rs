//! Dashboard landing page: greeting, headline counts, recent orders.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Counts come from the paginated list
//! endpoints' `total` field, so each card costs one small request.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use souksync::ApiClient;
use souksync::ApiError;
use souksync::api::types::{Order, Page, Product};
use souksync::listing::ListQuery;
use souksync::orders::OrderStatus;

use crate::components::status::{ErrorNote, LoadingNote, PageHeader};
use crate::state::session::use_session_state;
use crate::util::load::{LoadState, PageScope};

const RECENT_ORDERS: u32 = 5;

/// Headline numbers shown on the landing page.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub pending_orders: u64,
    pub total_orders: u64,
    pub products: u64,
    pub recent: Vec<Order>,
}

impl Summary {
    pub fn from_pages(pending: &Page<Order>, recent: Page<Order>, products: &Page<Product>) -> Self {
        Self {
            pending_orders: pending.total,
            total_orders: recent.total,
            products: products.total,
            recent: recent.items,
        }
    }

    pub fn cards(&self) -> [(&'static str, String); 3] {
        [
            ("Pending Orders", self.pending_orders.to_string()),
            ("Total Orders", self.total_orders.to_string()),
            ("Products", self.products.to_string()),
        ]
    }
}

async fn fetch_summary(api: ApiClient) -> Result<Summary, ApiError> {
    let pending = api
        .list_orders(&ListQuery::new().per_page(1).status(OrderStatus::Pending.as_str()))
        .await?;
    let recent = api.list_orders(&ListQuery::new().per_page(RECENT_ORDERS)).await?;
    let products = api.list_products(&ListQuery::new().per_page(1)).await?;
    Ok(Summary::from_pages(&pending, recent, &products))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_session_state();
    let scope = PageScope::mount();
    let summary = RwSignal::new(LoadState::<Summary>::Loading);

    let reload = Callback::new(move |()| scope.load(summary, "Failed to load dashboard", fetch_summary));
    reload.run(());

    let greeting = move || {
        state
            .get()
            .user
            .map_or_else(|| "User".to_owned(), |u| u.display_name().to_owned())
    };

    view! {
        <div class="dashboard-page">
            <PageHeader title="Dashboard" subtitle="Here's what's happening with your business today."/>
            <h2 class="dashboard-page__welcome">
                "Welcome back, " <span class="dashboard-page__name">{greeting}</span>
            </h2>
            {move || match summary.get() {
                LoadState::Loading => view! { <LoadingNote text="Loading dashboard..."/> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorNote message=message on_retry=reload/> }.into_any(),
                LoadState::Ready(data) => view! { <SummaryView data=data/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SummaryView(data: Summary) -> impl IntoView {
    let cards = data
        .cards()
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="kpi-card">
                    <p class="kpi-card__value">{value}</p>
                    <p class="kpi-card__label">{label}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let recent = if data.recent.is_empty() {
        view! { <p class="page__note">"No orders yet."</p> }.into_any()
    } else {
        view! {
            <ul class="dashboard-page__recent">
                {data
                    .recent
                    .into_iter()
                    .map(|order| {
                        view! {
                            <li>
                                <span class="mono">{order.short_id().to_owned()}</span>
                                <span class="badge">{order.status.label().to_owned()}</span>
                                <span>{order.total.clone()} " ETB"</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="dashboard-page__cards">{cards}</div>
        <section class="dashboard-page__panel">
            <h2>"Recent Orders"</h2>
            {recent}
        </section>
    }
}
