//! Public landing page with the marketing CTA section.

use leptos::prelude::*;

use crate::components::cta::CtaBanner;

/// Landing page shown at `/`.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1>"Zipship"</h1>
                <p>"Courier rates from every carrier, one dashboard."</p>
            </header>
            <CtaBanner/>
        </div>
    }
}
