//! Case snapshot types: stage/progress enumerations and the read-only
//! projection supplied by the storage collaborator.
//!
//! Milestone dates are `Option<String>` holding `YYYY-MM-DD` values. Field
//! presence/absence is the sole supersession signal; there are no separately
//! stored "done" booleans anywhere in the model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Pipeline stage of a labor-certification case. A case is in exactly one
/// stage at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStage {
    #[serde(rename = "intake-wage-determination")]
    WageDetermination,
    #[serde(rename = "recruitment")]
    Recruitment,
    #[serde(rename = "labor-certification-filing")]
    LaborCertFiling,
    #[serde(rename = "immigrant-petition")]
    ImmigrantPetition,
    #[serde(rename = "closed")]
    Closed,
}

impl fmt::Display for CaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStage::WageDetermination => write!(f, "intake-wage-determination"),
            CaseStage::Recruitment => write!(f, "recruitment"),
            CaseStage::LaborCertFiling => write!(f, "labor-certification-filing"),
            CaseStage::ImmigrantPetition => write!(f, "immigrant-petition"),
            CaseStage::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for CaseStage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "intake-wage-determination" => Ok(CaseStage::WageDetermination),
            "recruitment" => Ok(CaseStage::Recruitment),
            "labor-certification-filing" => Ok(CaseStage::LaborCertFiling),
            "immigrant-petition" => Ok(CaseStage::ImmigrantPetition),
            "closed" => Ok(CaseStage::Closed),
            other => Err(format!("unknown case stage: '{}'", other)),
        }
    }
}

/// Sub-stage progress marker. The (stage, progress) pair maps to a business
/// bucket name via the summary builder's fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseProgress {
    /// Work for the current stage is in preparation or underway.
    Working,
    /// The stage's governing filing/submission has happened.
    Filed,
    /// The stage finished with a final outcome (approval or denial).
    Complete,
}

impl fmt::Display for CaseProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseProgress::Working => write!(f, "working"),
            CaseProgress::Filed => write!(f, "filed"),
            CaseProgress::Complete => write!(f, "complete"),
        }
    }
}

/// A request-for-information or request-for-evidence entry.
///
/// An entry is outstanding while it has a received date and no submitted
/// date; only the first outstanding entry in list order carries a live
/// deadline (business policy assumes at most one outstanding at a time).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgencyRequest {
    #[serde(default)]
    pub received_date: Option<String>,
    #[serde(default)]
    pub response_due_date: Option<String>,
    #[serde(default)]
    pub response_submitted_date: Option<String>,
}

impl AgencyRequest {
    /// Received but not yet answered.
    pub fn is_outstanding(&self) -> bool {
        self.received_date.is_some() && self.response_submitted_date.is_none()
    }
}

/// Read-only case projection supplied by the storage/query collaborator.
///
/// All milestone dates are optional `YYYY-MM-DD` strings. The engine never
/// mutates a snapshot and holds no reference to it across calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseSnapshot {
    pub id: Uuid,
    pub stage: CaseStage,
    pub progress: CaseProgress,

    /// Deletion marker; presence means the case is soft-deleted.
    #[serde(default)]
    pub deleted_at: Option<String>,
    /// Duplicate marker; presence means this case duplicates another.
    #[serde(default)]
    pub duplicate_of: Option<Uuid>,

    // Prevailing wage determination milestones.
    #[serde(default)]
    pub pwd_filed_date: Option<String>,
    #[serde(default)]
    pub pwd_determined_date: Option<String>,
    #[serde(default)]
    pub pwd_expiration_date: Option<String>,

    // Recruitment milestones. The stored window close overrides the value
    // derived from the recruitment start.
    #[serde(default)]
    pub recruitment_start_date: Option<String>,
    #[serde(default)]
    pub recruitment_end_date: Option<String>,
    #[serde(default)]
    pub recruitment_window_closes_date: Option<String>,

    // Filing window bounds; stored values override derivation.
    #[serde(default)]
    pub filing_window_opens_date: Option<String>,
    #[serde(default)]
    pub filing_window_closes_date: Option<String>,

    // Labor certification (ETA 9089) milestones.
    #[serde(default)]
    pub labor_cert_filed_date: Option<String>,
    #[serde(default)]
    pub labor_cert_certified_date: Option<String>,
    #[serde(default)]
    pub labor_cert_expiration_date: Option<String>,

    // Immigrant petition (I-140) milestones.
    #[serde(default)]
    pub petition_filed_date: Option<String>,
    #[serde(default)]
    pub petition_receipt_date: Option<String>,
    #[serde(default)]
    pub petition_approved_date: Option<String>,
    #[serde(default)]
    pub petition_denied_date: Option<String>,

    #[serde(default)]
    pub rfi_requests: Vec<AgencyRequest>,
    #[serde(default)]
    pub rfe_requests: Vec<AgencyRequest>,
}

impl CaseSnapshot {
    /// Empty snapshot in the given stage with no milestones recorded.
    pub fn new(stage: CaseStage, progress: CaseProgress) -> Self {
        Self {
            id: Uuid::new_v4(),
            stage,
            progress,
            deleted_at: None,
            duplicate_of: None,
            pwd_filed_date: None,
            pwd_determined_date: None,
            pwd_expiration_date: None,
            recruitment_start_date: None,
            recruitment_end_date: None,
            recruitment_window_closes_date: None,
            filing_window_opens_date: None,
            filing_window_closes_date: None,
            labor_cert_filed_date: None,
            labor_cert_certified_date: None,
            labor_cert_expiration_date: None,
            petition_filed_date: None,
            petition_receipt_date: None,
            petition_approved_date: None,
            petition_denied_date: None,
            rfi_requests: Vec::new(),
            rfe_requests: Vec::new(),
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.stage == CaseStage::Closed
    }
}

// ── Tests ───────────────────────────────────────────────────────────
