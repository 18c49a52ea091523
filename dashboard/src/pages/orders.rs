//! Orders page: filterable, paginated order table with status actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Action buttons only offer the transitions `OrderStatus::next_statuses`
//! allows. The server re-validates every transition, so a rejected change
//! surfaces as an inline error and the table keeps the old row.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use leptos::prelude::*;
use souksync::ApiClient;
use souksync::api::types::{Order, Page};
use souksync::listing::{DEFAULT_PER_PAGE, ListQuery};
use souksync::orders::OrderStatus;

use crate::components::status::{ErrorNote, LoadingNote, PageHeader};
use crate::util::load::{LoadState, PageScope};

/// `(value, label)` pairs for the status filter; the empty value means all.
pub fn status_filter_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "All statuses".to_owned())];
    options.extend(OrderStatus::KNOWN.iter().map(|s| (s.as_str().to_owned(), s.label().to_owned())));
    options
}

/// Swap the row whose id matches `updated`. Returns false if it is not on this page.
pub fn replace_order(page: &mut Page<Order>, updated: Order) -> bool {
    match page.items.iter_mut().find(|o| o.id == updated.id) {
        Some(row) => {
            *row = updated;
            true
        }
        None => false,
    }
}

fn list_query(page: u32, status: &str) -> ListQuery {
    ListQuery::new().page(page).per_page(DEFAULT_PER_PAGE).status(status)
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let scope = PageScope::mount();

    let orders = RwSignal::new(LoadState::<Page<Order>>::Loading);
    let page_no = RwSignal::new(1_u32);
    let status_filter = RwSignal::new(String::new());
    let updating = RwSignal::new(None::<String>);
    let row_error = RwSignal::new(None::<String>);

    let load_scope = scope.clone();
    let reload = Callback::new(move |()| {
        let query = list_query(page_no.get_untracked(), &status_filter.get_untracked());
        load_scope.load(orders, "Failed to load orders", move |api: ApiClient| async move {
            api.list_orders(&query).await
        });
    });
    reload.run(());

    let go_to = move |page: u32| {
        page_no.set(page);
        reload.run(());
    };

    let on_filter = move |ev: leptos::ev::Event| {
        status_filter.set(event_target_value(&ev));
        go_to(1);
    };

    let on_transition = Callback::new(move |(id, next): (String, OrderStatus)| {
        if updating.get_untracked().is_some() {
            return;
        }
        updating.set(Some(id.clone()));
        row_error.set(None);
        scope.run(
            move |api: ApiClient| async move { api.update_order_status(&id, next).await },
            move |result| {
                updating.set(None);
                match result {
                    Ok(updated) => orders.update(|state| {
                        if let LoadState::Ready(page) = state {
                            replace_order(page, updated);
                        }
                    }),
                    Err(e) => row_error.set(Some(e.user_message("Failed to update order"))),
                }
            },
        );
    });

    view! {
        <div class="orders-page">
            <PageHeader title="Order Management" subtitle="View and process customer orders."/>
            <div class="page__toolbar">
                <select on:change=on_filter>
                    {status_filter_options()
                        .into_iter()
                        .map(|(value, label)| {
                            let current = value.clone();
                            view! {
                                <option value=value prop:selected=move || status_filter.get() == current>
                                    {label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <Show when=move || row_error.get().is_some()>
                <p class="page__error" role="alert">{move || row_error.get().unwrap_or_default()}</p>
            </Show>
            {move || match orders.get() {
                LoadState::Loading => view! { <LoadingNote text="Loading orders..."/> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorNote message=message on_retry=reload/> }.into_any(),
                LoadState::Ready(page) if page.items.is_empty() => {
                    view! { <p class="page__note">"No orders"</p> }.into_any()
                }
                LoadState::Ready(page) => {
                    let (has_prev, has_next, current) = (page.has_prev(), page.has_next(), page.page);
                    let pages = page.total_pages();
                    let total = page.total;
                    view! {
                        <p class="page__note">{format!("{total} order{}", if total == 1 { "" } else { "s" })}</p>
                        <OrderTable rows=page.items updating=updating on_transition=on_transition/>
                        <div class="pager">
                            <button class="btn" disabled=!has_prev on:click=move |_| go_to(current.saturating_sub(1).max(1))>
                                "Previous"
                            </button>
                            <span>{format!("Page {current} of {pages}")}</span>
                            <button class="btn" disabled=!has_next on:click=move |_| go_to(current + 1)>
                                "Next"
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn OrderTable(
    rows: Vec<Order>,
    updating: RwSignal<Option<String>>,
    on_transition: Callback<(String, OrderStatus)>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Status"</th>
                    <th class="num">"Total (ETB)"</th>
                    <th>"Items"</th>
                    <th>"Created"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|order| {
                        let busy_id = order.id.clone();
                        let actions = order
                            .status
                            .next_statuses()
                            .iter()
                            .map(|next| {
                                let id = order.id.clone();
                                let next = next.clone();
                                let label = next.label().to_owned();
                                let busy_id = busy_id.clone();
                                view! {
                                    <button
                                        class="btn btn--small"
                                        disabled=move || updating.get().as_deref() == Some(busy_id.as_str())
                                        on:click=move |_| on_transition.run((id.clone(), next.clone()))
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>();
                        view! {
                            <tr>
                                <td class="mono">{format!("{}…", order.short_id())}</td>
                                <td>
                                    <span class=format!("badge badge--{}", order.status.as_str())>
                                        {order.status.label().to_owned()}
                                    </span>
                                </td>
                                <td class="num">{order.total.clone()}</td>
                                <td>{order.items.len()}</td>
                                <td>{order.created_at.get(..10).unwrap_or(&order.created_at).to_owned()}</td>
                                <td class="actions">{actions}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
