//! Seller profile page, parent collaborator for the agreement modal.
//!
//! Owns the agreement record and the modal's open flag. Durable effects
//! (recording an accept/reject decision) happen here, not in the modal.

use leptos::prelude::*;

use crate::components::agreement_modal::AgreementModal;
use crate::state::agreement::AgreementVersion;

#[cfg(feature = "hydrate")]
use crate::state::agreement::{AgreementStatus, record_decision};

/// Seller profile route at `/seller/profile`.
#[component]
pub fn SellerProfilePage() -> impl IntoView {
    let agreement = RwSignal::new(None::<AgreementVersion>);
    let show_agreement = RwSignal::new(false);

    // Fetch the current agreement version on mount.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(record) = crate::net::api::fetch_current_agreement().await {
                agreement.set(Some(record));
            }
        });
    }

    let on_close = Callback::new(move |()| show_agreement.set(false));

    let on_accept = Callback::new(move |record: AgreementVersion| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::respond_to_agreement(&record, true).await {
                    agreement.update(|current| record_decision(current, AgreementStatus::Accepted));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    });

    let on_reject = Callback::new(move |record: AgreementVersion| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::respond_to_agreement(&record, false).await {
                    agreement.update(|current| record_decision(current, AgreementStatus::Rejected));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    });

    let agreement_summary = move || {
        agreement.get().map(|a| {
            view! {
                <div class="profile-page__agreement-row">
                    <span>{format!("Merchant Agreement {}", a.version)}</span>
                    <span class=a.status.badge_class()>{a.status.as_str()}</span>
                    <button class="btn" on:click=move |_| show_agreement.set(true)>
                        "View Agreement"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class="profile-page">
            <h1>"Seller Profile"</h1>
            {agreement_summary}

            <AgreementModal
                open=show_agreement
                agreement=agreement
                on_close=on_close
                on_accept=on_accept
                on_reject=on_reject
            />
        </div>
    }
}
