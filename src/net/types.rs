//! Wire DTOs for the client/server boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/customer/orders/status-counts`.
///
/// Keys are status labels (`"Delivered"`, `"In Transit"`, ...); absent
/// labels mean the caller keeps whatever count it already had.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCountsResponse {
    pub counts: HashMap<String, u32>,
}

/// Gradient endpoints for the CTA banner background.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

/// Marketing content for the CTA banner, fetched and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaContent {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub image_url: String,
    pub gradient: Gradient,
}

impl CtaContent {
    /// Inline style for the banner background.
    #[must_use]
    pub fn gradient_style(&self) -> String {
        format!(
            "background-image: linear-gradient(to right, {}, {})",
            self.gradient.from, self.gradient.to
        )
    }
}
