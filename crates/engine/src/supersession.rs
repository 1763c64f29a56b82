//! Supersession rules: which deadline types are still live for a case.
//!
//! A deadline stops mattering once a later milestone has occurred: a filed
//! labor certification retires every pre-filing deadline, a filed petition
//! retires the petition-filing deadline. Presence of the milestone date
//! field is the only signal consulted.

use permtrack_core::{AgencyRequest, CaseSnapshot, DeadlineType};
use serde::Serialize;

/// Why a deadline type is not live for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InactiveReason {
    CaseClosed,
    CaseDeleted,
    LaborCertFiled,
    PetitionFiled,
    MissingPrerequisite,
    NoOutstandingRequest,
}

/// Resolver output: live or not, and why not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadlineStatus {
    pub active: bool,
    pub reason: Option<InactiveReason>,
}

impl DeadlineStatus {
    fn active() -> Self {
        Self {
            active: true,
            reason: None,
        }
    }

    fn inactive(reason: InactiveReason) -> Self {
        Self {
            active: false,
            reason: Some(reason),
        }
    }
}

/// First outstanding entry in list order, if any.
///
/// Business policy assumes at most one request is outstanding at a time, so
/// list order is the tie-break when data says otherwise.
pub fn outstanding_request(requests: &[AgencyRequest]) -> Option<&AgencyRequest> {
    requests.iter().find(|r| r.is_outstanding())
}

/// Decide whether `deadline_type` is still live for `case`.
///
/// Closed or deleted cases short-circuit: every type is inactive.
pub fn deadline_status(deadline_type: DeadlineType, case: &CaseSnapshot) -> DeadlineStatus {
    if case.is_closed() {
        return DeadlineStatus::inactive(InactiveReason::CaseClosed);
    }
    if case.is_deleted() {
        return DeadlineStatus::inactive(InactiveReason::CaseDeleted);
    }

    match deadline_type {
        DeadlineType::WageDetExpiration => {
            if case.pwd_expiration_date.is_none() {
                DeadlineStatus::inactive(InactiveReason::MissingPrerequisite)
            } else if case.labor_cert_filed_date.is_some() {
                DeadlineStatus::inactive(InactiveReason::LaborCertFiled)
            } else {
                DeadlineStatus::active()
            }
        }
        DeadlineType::FilingWindowOpens | DeadlineType::FilingWindowCloses => {
            if case.labor_cert_filed_date.is_some() {
                DeadlineStatus::inactive(InactiveReason::LaborCertFiled)
            } else {
                DeadlineStatus::active()
            }
        }
        DeadlineType::PetitionFilingDeadline => {
            if case.labor_cert_certified_date.is_none()
                || case.labor_cert_expiration_date.is_none()
            {
                DeadlineStatus::inactive(InactiveReason::MissingPrerequisite)
            } else if case.petition_filed_date.is_some() {
                DeadlineStatus::inactive(InactiveReason::PetitionFiled)
            } else {
                DeadlineStatus::active()
            }
        }
        DeadlineType::RfiDue => request_status(&case.rfi_requests),
        DeadlineType::RfeDue => request_status(&case.rfe_requests),
    }
}

fn request_status(requests: &[AgencyRequest]) -> DeadlineStatus {
    if outstanding_request(requests).is_some() {
        DeadlineStatus::active()
    } else {
        DeadlineStatus::inactive(InactiveReason::NoOutstandingRequest)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
