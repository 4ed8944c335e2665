use super::*;

fn agreement(status: AgreementStatus) -> AgreementVersion {
    AgreementVersion {
        version: "v2.1".to_owned(),
        doc_link: "/docs/merchant-agreement-v2.1.pdf".to_owned(),
        acceptance_date: String::new(),
        published_on: "2025-02-22T17:26:32Z".to_owned(),
        ip_address: "203.0.113.7".to_owned(),
        status,
    }
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn modal_hidden_when_closed() {
    let a = agreement(AgreementStatus::Pending);
    assert!(!modal_visible(false, Some(&a)));
    assert!(!modal_visible(false, None));
}

#[test]
fn modal_hidden_without_agreement_even_when_open() {
    assert!(!modal_visible(true, None));
}

#[test]
fn modal_visible_when_open_with_agreement() {
    let a = agreement(AgreementStatus::Accepted);
    assert!(modal_visible(true, Some(&a)));
}

// =============================================================
// Action gating
// =============================================================

#[test]
fn can_respond_only_while_pending() {
    assert!(agreement(AgreementStatus::Pending).can_respond());
    assert!(!agreement(AgreementStatus::Accepted).can_respond());
    assert!(!agreement(AgreementStatus::Rejected).can_respond());
}

// =============================================================
// Decision recording
// =============================================================

#[test]
fn record_decision_updates_held_record() {
    let mut held = Some(agreement(AgreementStatus::Pending));
    record_decision(&mut held, AgreementStatus::Accepted);
    assert_eq!(held.unwrap().status, AgreementStatus::Accepted);

    let mut held = Some(agreement(AgreementStatus::Pending));
    record_decision(&mut held, AgreementStatus::Rejected);
    assert_eq!(held.unwrap().status, AgreementStatus::Rejected);
}

#[test]
fn record_decision_on_missing_record_is_a_noop() {
    let mut held = None;
    record_decision(&mut held, AgreementStatus::Accepted);
    assert_eq!(held, None);
}

// =============================================================
// Badge styling
// =============================================================

#[test]
fn badge_classes_map_green_red_amber() {
    assert_eq!(
        AgreementStatus::Accepted.badge_class(),
        "agreement-modal__status--accepted"
    );
    assert_eq!(
        AgreementStatus::Rejected.badge_class(),
        "agreement-modal__status--rejected"
    );
    assert_eq!(
        AgreementStatus::Pending.badge_class(),
        "agreement-modal__status--pending"
    );
}

#[test]
fn badge_classes_are_distinct() {
    assert_ne!(
        AgreementStatus::Accepted.badge_class(),
        AgreementStatus::Rejected.badge_class()
    );
    assert_ne!(
        AgreementStatus::Accepted.badge_class(),
        AgreementStatus::Pending.badge_class()
    );
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn agreement_deserializes_camel_case() {
    let json = serde_json::json!({
        "version": "v2.1",
        "docLink": "/docs/merchant-agreement-v2.1.pdf",
        "acceptanceDate": "",
        "publishedOn": "2025-02-22T17:26:32Z",
        "ipAddress": "203.0.113.7",
        "status": "Pending"
    });
    let parsed: AgreementVersion = serde_json::from_value(json).expect("agreement should parse");
    assert_eq!(parsed, agreement(AgreementStatus::Pending));
}

#[test]
fn agreement_rejects_unknown_status() {
    let json = serde_json::json!({
        "version": "v1",
        "docLink": "",
        "acceptanceDate": "",
        "publishedOn": "",
        "ipAddress": "",
        "status": "Expired"
    });
    assert!(serde_json::from_value::<AgreementVersion>(json).is_err());
}
