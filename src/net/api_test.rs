use super::*;

#[test]
fn simulated_counts_cover_all_six_labels() {
    let counts = simulated_counts();
    for label in [
        "Booked",
        "Processing",
        "In Transit",
        "Out for Delivery",
        "Delivered",
        "Returned",
    ] {
        assert!(counts.contains_key(label), "missing {label}");
    }
    assert_eq!(counts.len(), 6);
}

#[test]
fn simulated_counts_match_development_fixture() {
    let counts = simulated_counts();
    assert_eq!(counts.get("Delivered"), Some(&5));
    assert_eq!(counts.get("Out for Delivery"), Some(&1));
}

#[test]
fn counts_source_defaults_by_build_profile() {
    let expected = if cfg!(debug_assertions) {
        CountsSource::Simulated
    } else {
        CountsSource::Live
    };
    assert_eq!(CountsSource::default(), expected);
    assert_eq!(CountsFetcher::default().source, expected);
}
