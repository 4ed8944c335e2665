//! Create-order entry route.

use leptos::prelude::*;

/// Create-order route at `/customer/create-order`.
///
/// Booking flow lives elsewhere; this page anchors the route the home
/// page links to.
#[component]
pub fn CreateOrderPage() -> impl IntoView {
    view! {
        <div class="create-order-page">
            <h1>"Create Order"</h1>
            <p>"Enter pickup and delivery details to book a shipment."</p>
        </div>
    }
}
