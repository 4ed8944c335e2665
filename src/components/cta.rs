//! Marketing call-to-action banner with remote content.

use leptos::prelude::*;

use crate::net::types::CtaContent;
use crate::util::motion::{MotionTiming, reveal_style};

/// CTA section rendered on the landing page.
///
/// Requests content once on mount. Three mutually exclusive states:
/// loading spinner, visible error message, rendered content. No caching
/// and no retry; the section is short-lived and idempotent to re-render.
#[component]
pub fn CtaBanner() -> impl IntoView {
    let content = LocalResource::new(|| crate::net::api::fetch_cta());

    view! {
        <section class="cta">
            <Suspense fallback=move || {
                view! { <div class="cta__spinner" aria-label="Loading"></div> }
            }>
                {move || {
                    content
                        .get()
                        .map(|result| match result {
                            Ok(data) => cta_content_view(&data).into_any(),
                            Err(message) => {
                                view! { <div class="cta__error">{message}</div> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

fn cta_content_view(data: &CtaContent) -> impl IntoView {
    let style = format!(
        "{}; {}",
        data.gradient_style(),
        reveal_style(MotionTiming::default().cta_reveal_ms)
    );
    view! {
        <div class="cta__panel" style=style>
            <div class="cta__copy">
                <h2 class="cta__title">{data.title.clone()}</h2>
                <p class="cta__description">{data.description.clone()}</p>
            </div>
            <img class="cta__image" src=data.image_url.clone() alt="Arrow pointing to sign up"/>
            <a class="btn btn--white cta__button" href="/signup">
                {data.button_text.clone()}
            </a>
        </div>
    }
}
