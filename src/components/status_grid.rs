//! Grid of order-status shortcut buttons.

use leptos::prelude::*;

use crate::state::status::{OrderStatus, StatusButton};

/// Six status shortcuts, each showing a count (or a spinner while the
/// refresh is outstanding) and navigating to the filtered orders list
/// via `on_select`.
#[component]
pub fn StatusGrid(
    buttons: RwSignal<Vec<StatusButton>>,
    loading: RwSignal<bool>,
    on_select: Callback<OrderStatus>,
) -> impl IntoView {
    view! {
        <div class="status-grid">
            {move || {
                buttons
                    .get()
                    .into_iter()
                    .map(|button| {
                        let status = button.status;
                        let count = button.count;
                        view! {
                            <button
                                class=format!("status-grid__btn {}", button.color)
                                on:click=move |_| on_select.run(status)
                            >
                                <span class="status-grid__count">
                                    {move || {
                                        if loading.get() {
                                            view! {
                                                <span
                                                    class="status-grid__spinner"
                                                    aria-label="Loading count"
                                                ></span>
                                            }
                                                .into_any()
                                        } else {
                                            view! { <span>{count}</span> }.into_any()
                                        }
                                    }}
                                </span>
                                <span class="status-grid__label">{button.label}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
