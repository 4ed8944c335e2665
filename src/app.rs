//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::CountsFetcher;
use crate::pages::{
    create_order::CreateOrderPage, home::CustomerHomePage, landing::LandingPage,
    orders::OrdersPage, profile::SellerProfilePage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the counts-fetcher capability and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Fetch strategy is decided once at startup; views never branch on
    // the environment themselves.
    provide_context(CountsFetcher::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/zipship.css"/>
        <Title text="Zipship"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("customer") view=CustomerHomePage/>
                <Route
                    path=(StaticSegment("customer"), StaticSegment("orders"))
                    view=OrdersPage
                />
                <Route
                    path=(StaticSegment("customer"), StaticSegment("create-order"))
                    view=CreateOrderPage
                />
                <Route
                    path=(StaticSegment("seller"), StaticSegment("profile"))
                    view=SellerProfilePage
                />
            </Routes>
        </Router>
    }
}
