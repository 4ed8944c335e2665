//! Customer home page: slideshow, create-order CTA, status shortcuts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the two background activities the client has: the
//! recurring slideshow timer and the one-shot status-count refresh. Both
//! are scoped to the page's lifetime; the timer loop stops when
//! `on_cleanup` clears its alive flag.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::slideshow::Slideshow;
use crate::components::status_grid::StatusGrid;
use crate::net::api::CountsFetcher;
use crate::state::home::SlideshowState;
use crate::state::status::{OrderStatus, default_status_buttons, status_route};
use crate::util::motion::{MotionTiming, reveal_style};

#[cfg(feature = "hydrate")]
use crate::state::home::SLIDE_INTERVAL_MS;
#[cfg(feature = "hydrate")]
use crate::state::status::apply_counts;

/// Customer landing route at `/customer`.
#[component]
pub fn CustomerHomePage() -> impl IntoView {
    let fetcher = expect_context::<CountsFetcher>();
    let navigate = use_navigate();

    let slideshow = RwSignal::new(SlideshowState::default());
    let buttons = RwSignal::new(default_status_buttons());
    let loading_counts = RwSignal::new(false);

    // Slideshow timer: advance every interval until the page unmounts.
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(SLIDE_INTERVAL_MS))
                    .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                slideshow.update(SlideshowState::advance);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Status counts: exactly one request on mount. Missing labels keep
    // their seeded defaults, so a failed fetch changes nothing.
    #[cfg(feature = "hydrate")]
    {
        loading_counts.set(true);
        leptos::task::spawn_local(async move {
            let counts = fetcher.status_counts().await;
            buttons.update(|b| apply_counts(b, &counts));
            loading_counts.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fetcher;
    }

    let on_status_select = Callback::new(move |status: OrderStatus| {
        navigate(&status_route(status), NavigateOptions::default());
    });

    view! {
        <div class="home-page">
            <Slideshow slideshow=slideshow/>

            <div
                class="home-page__content"
                style=reveal_style(MotionTiming::default().section_fade_ms)
            >
                <h1 class="home-page__headline">"CREATE ORDER" <br/> "NOW !"</h1>
                <a class="btn btn--customer home-page__create" href="/customer/create-order">
                    "Create Order"
                </a>
                <StatusGrid buttons=buttons loading=loading_counts on_select=on_status_select/>
            </div>
        </div>
    }
}
