//! Merchant agreement dialog.
//!
//! Stateless and purely presentational: the parent owns the open flag, the
//! agreement record, and any persistence triggered by the callbacks.

use leptos::prelude::*;

use crate::state::agreement::{AgreementVersion, modal_visible};

/// Modal displaying the merchant agreement with Accept/Reject/Close.
///
/// Visible iff `open` is true and `agreement` is non-`None`. Accept and
/// Reject render only while the record is pending; each forwards the full
/// record to its callback and then closes. Close never touches the record.
#[component]
pub fn AgreementModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] agreement: Signal<Option<AgreementVersion>>,
    on_close: Callback<()>,
    #[prop(optional)] on_accept: Option<Callback<AgreementVersion>>,
    #[prop(optional)] on_reject: Option<Callback<AgreementVersion>>,
) -> impl IntoView {
    let visible = move || modal_visible(open.get(), agreement.get().as_ref());
    let can_respond = move || agreement.get().is_some_and(|a| a.can_respond());

    let handle_accept = move |_| {
        if let (Some(cb), Some(record)) = (on_accept, agreement.get_untracked()) {
            cb.run(record);
            on_close.run(());
        }
    };
    let handle_reject = move |_| {
        if let (Some(cb), Some(record)) = (on_reject, agreement.get_untracked()) {
            cb.run(record);
            on_close.run(());
        }
    };

    view! {
        <Show when=visible>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog dialog--agreement agreement-modal"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="agreement-modal__header">
                        <h2>"Merchant Agreement"</h2>
                        <button
                            class="btn btn--icon"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="agreement-modal__body">
                        <p>
                            "This Merchant Agreement (the \"Agreement\") is made on February 22 2025, 5:26:32 pm"
                            <br/>
                            "and effective from February 22 2025, 5:26:32 pm"
                        </p>

                        <h3>"BY AND BETWEEN:"</h3>
                        <p>
                            "Zipship Tech Pvt Ltd, a company incorporated under the Companies Act, 2013,"
                            <br/>
                            "having its registered office at Plot 14, Logistics Park, Sector 48, Gurgaon, Haryana, 122018,"
                            <br/>
                            "duly represented by its Authorized Signatory having official e-mail admin@zipship.example"
                            <br/>
                            "(hereinafter referred to as \"Service Provider\", which expression shall include its successors-in-interest, affiliates and assigns) of the FIRST PARTY"
                        </p>

                        <h3>"AND"</h3>
                        <p>
                            "The Merchant named in this agreement version, a registered seller on the platform,"
                            <br/>
                            "duly represented by its Authorized Signatory at its registered business address"
                            <br/>
                            "(hereinafter referred to as \"Merchant\", which expression shall include its successors-in-interest, affiliates and permitted assigns) of the SECOND PARTY"
                        </p>
                        <p>
                            "Service Provider and Merchant are individually referred to as a \"Party\" and collectively as the \"Parties\"."
                        </p>

                        <h3>"WHEREAS"</h3>
                        <ul>
                            <li>"The Merchant is engaged in the sale of goods requiring courier and fulfilment services."</li>
                            <li>
                                "The Service Provider operates in the following verticals of logistics: warehousing and fulfilment, e-commerce SaaS, logistics aggregation, courier-related services, and other verticals."
                            </li>
                        </ul>
                    </div>

                    <div class="agreement-modal__footer">
                        <div class="agreement-modal__status-line">
                            "Agreement Status: "
                            {move || {
                                agreement
                                    .get()
                                    .map(|a| {
                                        let badge = a.status.badge_class();
                                        view! { <span class=badge>{a.status.as_str()}</span> }
                                    })
                            }}
                        </div>
                        <div class="agreement-modal__actions">
                            <Show when=can_respond>
                                <button class="btn btn--accept" on:click=handle_accept>
                                    "Accept Agreement"
                                </button>
                                <button class="btn btn--destructive" on:click=handle_reject>
                                    "Reject Agreement"
                                </button>
                            </Show>
                            <button class="btn" on:click=move |_| on_close.run(())>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
