use super::*;

fn counts(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_buttons_cover_all_six_statuses() {
    let buttons = default_status_buttons();
    assert_eq!(buttons.len(), 6);
    let statuses: Vec<_> = buttons.iter().map(|b| b.status).collect();
    for status in [
        OrderStatus::Booked,
        OrderStatus::Processing,
        OrderStatus::InTransit,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Returned,
    ] {
        assert!(statuses.contains(&status), "missing {status:?}");
    }
}

#[test]
fn default_buttons_have_unique_ids() {
    let buttons = default_status_buttons();
    for (i, a) in buttons.iter().enumerate() {
        for b in &buttons[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn default_delivered_count_is_seeded() {
    let buttons = default_status_buttons();
    let delivered = buttons
        .iter()
        .find(|b| b.status == OrderStatus::Delivered)
        .expect("delivered button");
    assert_eq!(delivered.count, 156);
}

// =============================================================
// apply_counts merge rule
// =============================================================

#[test]
fn apply_counts_overwrites_only_present_labels() {
    let mut buttons = default_status_buttons();
    let before: Vec<u32> = buttons.iter().map(|b| b.count).collect();

    apply_counts(&mut buttons, &counts(&[("Delivered", 5)]));

    for (button, prior) in buttons.iter().zip(before) {
        if button.status == OrderStatus::Delivered {
            assert_eq!(button.count, 5);
        } else {
            assert_eq!(button.count, prior);
        }
    }
}

#[test]
fn apply_counts_empty_map_is_a_noop() {
    let mut buttons = default_status_buttons();
    let before = buttons.clone();
    apply_counts(&mut buttons, &HashMap::new());
    assert_eq!(buttons, before);
}

#[test]
fn apply_counts_full_map_overwrites_everything() {
    let mut buttons = default_status_buttons();
    apply_counts(
        &mut buttons,
        &counts(&[
            ("Booked", 4),
            ("Processing", 2),
            ("In Transit", 3),
            ("Out for Delivery", 1),
            ("Delivered", 5),
            ("Returned", 2),
        ]),
    );
    let delivered = buttons.iter().find(|b| b.status == OrderStatus::Delivered).unwrap();
    let booked = buttons.iter().find(|b| b.status == OrderStatus::Booked).unwrap();
    assert_eq!(delivered.count, 5);
    assert_eq!(booked.count, 4);
}

#[test]
fn apply_counts_ignores_unknown_labels() {
    let mut buttons = default_status_buttons();
    let before = buttons.clone();
    apply_counts(&mut buttons, &counts(&[("Lost in Warehouse", 999)]));
    assert_eq!(buttons, before);
}

#[test]
fn apply_counts_is_idempotent() {
    let mut once = default_status_buttons();
    let map = counts(&[("Returned", 7), ("Booked", 0)]);
    apply_counts(&mut once, &map);
    let mut twice = once.clone();
    apply_counts(&mut twice, &map);
    assert_eq!(once, twice);
}

// =============================================================
// Routes
// =============================================================

#[test]
fn status_route_for_delivered() {
    assert_eq!(
        status_route(OrderStatus::Delivered),
        "/customer/orders?status=Delivered"
    );
}

#[test]
fn status_route_keeps_multiword_labels() {
    assert_eq!(
        status_route(OrderStatus::OutForDelivery),
        "/customer/orders?status=Out for Delivery"
    );
}
