//! Order-status shortcut buttons and the count-refresh merge rule.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::collections::HashMap;

/// Lifecycle stage of a customer order, as used by the counts endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Booked,
    Processing,
    InTransit,
    OutForDelivery,
    Delivered,
    Returned,
}

impl OrderStatus {
    /// Wire label used as the key in the counts response and as the
    /// `status` query parameter on the orders route.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Booked => "Booked",
            Self::Processing => "Processing",
            Self::InTransit => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Returned => "Returned",
        }
    }
}

/// Orders route filtered by one status, e.g. `/customer/orders?status=Delivered`.
#[must_use]
pub fn status_route(status: OrderStatus) -> String {
    format!("/customer/orders?status={}", status.as_str())
}

/// One shortcut button on the customer home page.
///
/// `count` is the only mutable field; everything else is fixed at load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusButton {
    pub id: u32,
    pub label: &'static str,
    pub count: u32,
    pub color: &'static str,
    pub status: OrderStatus,
}

/// The six fixed buttons with their seeded fallback counts.
#[must_use]
pub fn default_status_buttons() -> Vec<StatusButton> {
    vec![
        StatusButton {
            id: 6,
            label: "Manifested",
            count: 67,
            color: "status-grid__btn--booked",
            status: OrderStatus::Booked,
        },
        StatusButton {
            id: 5,
            label: "Picked Up",
            count: 34,
            color: "status-grid__btn--processing",
            status: OrderStatus::Processing,
        },
        StatusButton {
            id: 4,
            label: "In Transit",
            count: 89,
            color: "status-grid__btn--in-transit",
            status: OrderStatus::InTransit,
        },
        StatusButton {
            id: 2,
            label: "Out for Delivery",
            count: 43,
            color: "status-grid__btn--out-for-delivery",
            status: OrderStatus::OutForDelivery,
        },
        StatusButton {
            id: 1,
            label: "Delivered",
            count: 156,
            color: "status-grid__btn--delivered",
            status: OrderStatus::Delivered,
        },
        StatusButton {
            id: 3,
            label: "Returned",
            count: 12,
            color: "status-grid__btn--returned",
            status: OrderStatus::Returned,
        },
    ]
}

/// Merge a counts response into the button set.
///
/// A button's count is overwritten only when the response contains its
/// status label; missing labels retain the prior value. An empty map (the
/// fetch-failure fallback) is therefore a no-op.
pub fn apply_counts(buttons: &mut [StatusButton], counts: &HashMap<String, u32>) {
    for button in buttons {
        if let Some(&count) = counts.get(button.status.as_str()) {
            button.count = count;
        }
    }
}
