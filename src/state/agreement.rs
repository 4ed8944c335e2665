//! Merchant agreement record and the modal's visibility/gating rules.
//!
//! The agreement is owned by a parent collaborator (the seller profile
//! page); this module only models the record and the pure rules the modal
//! renders from.

#[cfg(test)]
#[path = "agreement_test.rs"]
mod agreement_test;

use serde::{Deserialize, Serialize};

/// Acceptance lifecycle state of an agreement version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgreementStatus {
    Accepted,
    Pending,
    Rejected,
}

impl AgreementStatus {
    /// Badge modifier class: green for accepted, red for rejected,
    /// amber while pending.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Accepted => "agreement-modal__status--accepted",
            Self::Rejected => "agreement-modal__status--rejected",
            Self::Pending => "agreement-modal__status--pending",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }
}

/// One published version of the merchant agreement, supplied by the parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementVersion {
    pub version: String,
    pub doc_link: String,
    pub acceptance_date: String,
    pub published_on: String,
    pub ip_address: String,
    pub status: AgreementStatus,
}

impl AgreementVersion {
    /// Accept/Reject controls are offered only while the record is pending.
    #[must_use]
    pub fn can_respond(&self) -> bool {
        self.status == AgreementStatus::Pending
    }
}

/// The modal renders iff it is open AND an agreement record exists.
#[must_use]
pub fn modal_visible(open: bool, agreement: Option<&AgreementVersion>) -> bool {
    open && agreement.is_some()
}

/// Overwrite the held record's status once the parent has recorded an
/// accept/reject decision. A missing record is left as-is.
pub fn record_decision(agreement: &mut Option<AgreementVersion>, status: AgreementStatus) {
    if let Some(current) = agreement {
        current.status = status;
    }
}
