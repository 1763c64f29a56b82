//! Violation record types produced by the enforcement evaluator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Breach kinds the enforcement evaluator can report. At most one violation
/// is returned per case per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationType {
    WageDetExpired,
    RecruitmentWindowMissed,
    FilingWindowMissed,
    LaborCertExpired,
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationType::WageDetExpired => write!(f, "wage-det-expired"),
            ViolationType::RecruitmentWindowMissed => write!(f, "recruitment-window-missed"),
            ViolationType::FilingWindowMissed => write!(f, "filing-window-missed"),
            ViolationType::LaborCertExpired => write!(f, "labor-cert-expired"),
        }
    }
}

/// Remedial action suggested to the automated-closure pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestedAction {
    Close,
    RestartRecruitment,
    RestartLaborCert,
}

impl fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestedAction::Close => write!(f, "close"),
            SuggestedAction::RestartRecruitment => write!(f, "restart-recruitment"),
            SuggestedAction::RestartLaborCert => write!(f, "restart-labor-cert"),
        }
    }
}

/// A deadline breach severe enough to require automatic closure or a restart
/// recommendation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Violation {
    pub violation_type: ViolationType,
    /// Short headline for notification subjects.
    pub title: String,
    /// Human-readable explanation of what was breached and why the action
    /// was chosen.
    pub reason: String,
    pub action: SuggestedAction,
    /// Whether the wage-determination runway still allows a restart.
    pub restart_feasible: bool,
}
