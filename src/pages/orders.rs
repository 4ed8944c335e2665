//! Customer order list, filtered by the `status` query parameter.
//!
//! Navigation target for the home page's status shortcuts. Listing
//! contents are out of scope here; the page surfaces the active filter.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Page heading reflecting the active status filter, if any.
#[must_use]
pub fn orders_heading(status_filter: Option<&str>) -> String {
    match status_filter {
        Some(status) => format!("Orders: {status}"),
        None => "Orders".to_owned(),
    }
}

/// Orders route at `/customer/orders?status=<label>`.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let query = use_query_map();
    let heading = move || query.with(|q| orders_heading(q.get("status").as_deref()));

    view! {
        <div class="orders-page">
            <h1 class="orders-page__heading">{heading}</h1>
            <p class="orders-page__empty">"No orders to show yet."</p>
        </div>
    }
}
