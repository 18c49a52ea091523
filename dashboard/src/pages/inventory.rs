//! Inventory page: paginated product table with search, sort, create, delete.
//!
//! Search and sort apply to the loaded page only; pagination is server-side.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;
use souksync::ApiClient;
use souksync::api::types::{Page, Product, ProductInput, User};
use souksync::listing::{DEFAULT_PER_PAGE, ListQuery, ProductSort, filter_and_sort_products};

use crate::components::status::{ErrorNote, LoadingNote, PageHeader};
use crate::state::session::use_session_state;
use crate::util::load::{LoadState, PageScope};

/// Draft of the "new product" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub sku: String,
    pub category: String,
    pub distributor_id: String,
}

impl ProductForm {
    /// Empty form, pre-filled with the user's distributor when they have one.
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            distributor_id: user.and_then(|u| u.distributor_id.clone()).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Validate the draft into a request body.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    pub fn to_input(&self) -> Result<ProductInput, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Product name is required.");
        }
        let price = parse_price(&self.price).ok_or("Price must be a positive number.")?;
        let distributor_id = self.distributor_id.trim();
        if distributor_id.is_empty() {
            return Err("Distributor is required.");
        }
        Ok(ProductInput {
            name: name.to_owned(),
            price,
            category: blank_to_none(&self.category),
            sku: blank_to_none(&self.sku),
            distributor_id: distributor_id.to_owned(),
        })
    }
}

/// Positive finite decimal, returned as the trimmed text the user typed.
pub fn parse_price(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().ok()?;
    (value.is_finite() && value > 0.0).then(|| trimmed.to_owned())
}

fn blank_to_none(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let state = use_session_state();
    let scope = PageScope::mount();

    let products = RwSignal::new(LoadState::<Page<Product>>::Loading);
    let page_no = RwSignal::new(1_u32);
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(ProductSort::default());

    let show_form = RwSignal::new(false);
    let form = RwSignal::new(ProductForm::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let row_error = RwSignal::new(None::<String>);

    let load_scope = scope.clone();
    let reload = Callback::new(move |()| {
        let query = ListQuery::new().page(page_no.get_untracked()).per_page(DEFAULT_PER_PAGE);
        load_scope.load(products, "Failed to load products", move |api: ApiClient| async move {
            api.list_products(&query).await
        });
    });
    reload.run(());

    let go_to = move |page: u32| {
        page_no.set(page);
        reload.run(());
    };

    let open_form = move |_| {
        form.set(ProductForm::for_user(state.get_untracked().user.as_ref()));
        form_error.set(None);
        show_form.set(true);
    };

    let create_scope = scope.clone();
    let submit = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let input = match form.get_untracked().to_input() {
            Ok(input) => input,
            Err(msg) => {
                form_error.set(Some(msg.to_owned()));
                return;
            }
        };
        saving.set(true);
        form_error.set(None);
        create_scope.run(
            move |api: ApiClient| async move { api.create_product(&input).await },
            move |result| {
                saving.set(false);
                match result {
                    Ok(_) => {
                        show_form.set(false);
                        reload.run(());
                    }
                    Err(e) => form_error.set(Some(e.user_message("Failed to create product"))),
                }
            },
        );
    });

    let delete_scope = scope;
    let on_delete = Callback::new(move |id: String| {
        row_error.set(None);
        delete_scope.run(
            move |api: ApiClient| async move { api.delete_product(&id).await },
            move |result| match result {
                Ok(()) => reload.run(()),
                Err(e) => row_error.set(Some(e.user_message("Failed to delete product"))),
            },
        );
    });

    view! {
        <div class="inventory-page">
            <PageHeader title="Inventory Management" subtitle="Manage your product catalogue."/>
            <div class="page__toolbar">
                <input
                    class="page__search"
                    type="search"
                    placeholder="Search name, SKU, category"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| sort.set(ProductSort::parse(&event_target_value(&ev)))>
                    {ProductSort::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str() prop:selected=move || sort.get() == s>{sort_label(s)}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn btn--primary" on:click=open_form>
                    "+ New Product"
                </button>
            </div>
            <Show when=move || row_error.get().is_some()>
                <p class="page__error" role="alert">{move || row_error.get().unwrap_or_default()}</p>
            </Show>
            {move || match products.get() {
                LoadState::Loading => view! { <LoadingNote text="Loading products..."/> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorNote message=message on_retry=reload/> }.into_any(),
                LoadState::Ready(page) => {
                    let rows = filter_and_sort_products(&page.items, &search.get(), sort.get());
                    let (has_prev, has_next, current) = (page.has_prev(), page.has_next(), page.page);
                    view! {
                        <p class="page__note">{format!("{} product(s)", page.total)}</p>
                        <ProductTable rows=rows on_delete=on_delete/>
                        <div class="pager">
                            <button class="btn" disabled=!has_prev on:click=move |_| go_to(current.saturating_sub(1).max(1))>
                                "Previous"
                            </button>
                            <span>{format!("Page {current} of {}", page.total_pages())}</span>
                            <button class="btn" disabled=!has_next on:click=move |_| go_to(current + 1)>
                                "Next"
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
            <Show when=move || show_form.get()>
                <ProductDialog form=form error=form_error saving=saving on_submit=submit on_cancel=Callback::new(move |()| show_form.set(false))/>
            </Show>
        </div>
    }
}

fn sort_label(sort: ProductSort) -> &'static str {
    match sort {
        ProductSort::Name => "Name",
        ProductSort::Price => "Price",
        ProductSort::Newest => "Newest",
    }
}

#[component]
fn ProductTable(rows: Vec<Product>, on_delete: Callback<String>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="page__note">"No products"</p> }.into_any();
    }
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"SKU"</th>
                    <th>"Category"</th>
                    <th class="num">"Price (ETB)"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|p| {
                        let id = p.id.clone();
                        view! {
                            <tr>
                                <td>{p.name}</td>
                                <td class="mono">{p.sku.unwrap_or_else(|| "—".to_owned())}</td>
                                <td>{p.category.unwrap_or_else(|| "—".to_owned())}</td>
                                <td class="num">{p.price}</td>
                                <td>{if p.is_active { "Active" } else { "Inactive" }}</td>
                                <td>
                                    <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn ProductDialog(
    form: RwSignal<ProductForm>,
    error: RwSignal<Option<String>>,
    saving: RwSignal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let field = move |label: &'static str, get: fn(&ProductForm) -> String, set: fn(&mut ProductForm, String)| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || get(&form.get())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Product"</h2>
                {field("Name", |f| f.name.clone(), |f, v| f.name = v)}
                {field("Price (ETB)", |f| f.price.clone(), |f, v| f.price = v)}
                {field("SKU", |f| f.sku.clone(), |f, v| f.sku = v)}
                {field("Category", |f| f.category.clone(), |f, v| f.category = v)}
                {field("Distributor ID", |f| f.distributor_id.clone(), |f, v| f.distributor_id = v)}
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || saving.get() on:click=move |_| on_submit.run(())>
                        {move || if saving.get() { "Saving..." } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
