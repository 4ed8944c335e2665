//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty/error values since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result`/empty-map outputs instead of panics so a
//! failed fetch degrades the page to its seeded defaults without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::HashMap;

use crate::state::agreement::AgreementVersion;

use super::types::CtaContent;
#[cfg(feature = "hydrate")]
use super::types::StatusCountsResponse;

/// Simulated network latency for the non-production counts path.
pub const SIMULATED_LATENCY_MS: u64 = 800;

/// Which strategy the counts fetcher uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountsSource {
    /// Hit the real counts endpoint.
    Live,
    /// Sleep briefly, then return the fixed development mapping.
    Simulated,
}

impl Default for CountsSource {
    fn default() -> Self {
        if cfg!(debug_assertions) { Self::Simulated } else { Self::Live }
    }
}

/// Capability handed to the home page for its one status-counts request.
///
/// Injected via context from `App` so views never branch on the
/// environment themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountsFetcher {
    pub source: CountsSource,
}

impl CountsFetcher {
    /// Fetch the per-status order counts.
    ///
    /// Failures are logged and yield an empty map, which leaves the
    /// caller's seeded counts untouched.
    pub async fn status_counts(self) -> HashMap<String, u32> {
        match self.source {
            CountsSource::Live => fetch_status_counts().await,
            CountsSource::Simulated => {
                #[cfg(feature = "hydrate")]
                {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        SIMULATED_LATENCY_MS,
                    ))
                    .await;
                }
                simulated_counts()
            }
        }
    }
}

/// Fixed development mapping applied by the simulated path.
#[must_use]
pub fn simulated_counts() -> HashMap<String, u32> {
    [
        ("Booked", 4),
        ("Processing", 2),
        ("In Transit", 3),
        ("Out for Delivery", 1),
        ("Delivered", 5),
        ("Returned", 2),
    ]
    .into_iter()
    .map(|(label, count)| (label.to_owned(), count))
    .collect()
}

/// Fetch live counts from `/api/customer/orders/status-counts`.
/// Non-2xx or malformed bodies degrade to an empty map.
async fn fetch_status_counts() -> HashMap<String, u32> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get("/api/customer/orders/status-counts")
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                leptos::logging::warn!("status counts request failed: {e}");
                return HashMap::new();
            }
        };
        if !resp.ok() {
            leptos::logging::warn!("status counts request failed: HTTP {}", resp.status());
            return HashMap::new();
        }
        match resp.json::<StatusCountsResponse>().await {
            Ok(body) => body.counts,
            Err(e) => {
                leptos::logging::warn!("status counts body malformed: {e}");
                HashMap::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        HashMap::new()
    }
}

/// Fetch CTA banner content from `/api/marketing/cta`.
///
/// # Errors
///
/// Returns a displayable message if the request fails or the body is
/// malformed; the banner renders it in its error branch.
pub async fn fetch_cta() -> Result<CtaContent, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/marketing/cta")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("Failed to load CTA content (HTTP {})", resp.status()));
        }
        resp.json::<CtaContent>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("Failed to load CTA content".to_owned())
    }
}

/// Fetch the seller's current agreement version from
/// `/api/seller/agreement/current`. Returns `None` if there is no
/// agreement, on failure, or on the server.
pub async fn fetch_current_agreement() -> Option<AgreementVersion> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/seller/agreement/current")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AgreementVersion>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Record an accept/reject decision via `POST /api/seller/agreement/respond`.
/// Returns whether the server acknowledged the decision.
pub async fn respond_to_agreement(agreement: &AgreementVersion, accept: bool) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "version": agreement.version,
            "action": if accept { "accept" } else { "reject" },
        });
        let req = match gloo_net::http::Request::post("/api/seller/agreement/respond").json(&payload)
        {
            Ok(r) => r,
            Err(e) => {
                leptos::logging::warn!("agreement response payload failed: {e}");
                return false;
            }
        };
        match req.send().await {
            Ok(resp) if resp.ok() => true,
            Ok(resp) => {
                leptos::logging::warn!("agreement response rejected: HTTP {}", resp.status());
                false
            }
            Err(e) => {
                leptos::logging::warn!("agreement response failed: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (agreement, accept);
        false
    }
}
