//! Notification text for violations.
//!
//! Pure formatting keyed off violation type and the close/restart branch;
//! the wording is part of the interface with the notification and UI
//! collaborators, so changes here are breaking for them.

use permtrack_core::{SuggestedAction, ViolationType};

/// Short headline for notification subjects.
pub(crate) fn title(violation_type: ViolationType) -> &'static str {
    match violation_type {
        ViolationType::WageDetExpired => "Wage determination expired",
        ViolationType::RecruitmentWindowMissed => "Recruitment window missed",
        ViolationType::FilingWindowMissed => "Filing window missed",
        ViolationType::LaborCertExpired => "Labor certification expired",
    }
}

/// Full explanation: what was breached, when, and why the suggested action
/// was chosen.
pub(crate) fn reason(
    violation_type: ViolationType,
    action: SuggestedAction,
    due_date: &str,
    days_overdue: i64,
) -> String {
    let breach = match violation_type {
        ViolationType::WageDetExpired => format!(
            "The prevailing wage determination expired on {} ({} days ago) with no labor certification filed.",
            due_date, days_overdue
        ),
        ViolationType::RecruitmentWindowMissed => format!(
            "The recruitment window closed on {} ({} days ago) with no labor certification filed.",
            due_date, days_overdue
        ),
        ViolationType::FilingWindowMissed => format!(
            "The filing window closed on {} ({} days ago) with no labor certification filed.",
            due_date, days_overdue
        ),
        ViolationType::LaborCertExpired => format!(
            "The labor certification expired on {} ({} days ago) with no immigrant petition filed.",
            due_date, days_overdue
        ),
    };

    let remedy = match (violation_type, action) {
        (ViolationType::WageDetExpired, _) => {
            "No remedy is available for an expired wage determination; the case must be closed."
        }
        (_, SuggestedAction::RestartRecruitment)
            if violation_type == ViolationType::LaborCertExpired =>
        {
            "The filing window has also closed; recruitment must be restarted before refiling."
        }
        (_, SuggestedAction::RestartRecruitment) => {
            "Enough wage-determination runway remains to restart recruitment."
        }
        (_, SuggestedAction::RestartLaborCert) => {
            "The filing window is still open; the labor certification can be refiled."
        }
        (_, SuggestedAction::Close) => {
            "The remaining wage-determination runway is too short to restart; the case must be closed."
        }
    };

    format!("{} {}", breach, remedy)
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_distinct_title() {
        let titles = [
            title(ViolationType::WageDetExpired),
            title(ViolationType::RecruitmentWindowMissed),
            title(ViolationType::FilingWindowMissed),
            title(ViolationType::LaborCertExpired),
        ];
        for (i, a) in titles.iter().enumerate() {
            for b in &titles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn reason_carries_date_and_branch() {
        let text = reason(
            ViolationType::RecruitmentWindowMissed,
            SuggestedAction::RestartRecruitment,
            "2025-01-05",
            10,
        );
        assert!(text.contains("2025-01-05"));
        assert!(text.contains("10 days ago"));
        assert!(text.contains("restart recruitment"));

        let text = reason(
            ViolationType::RecruitmentWindowMissed,
            SuggestedAction::Close,
            "2025-01-05",
            10,
        );
        assert!(text.contains("must be closed"));
    }

    #[test]
    fn cert_expiry_distinguishes_refile_from_restart() {
        let refile = reason(
            ViolationType::LaborCertExpired,
            SuggestedAction::RestartLaborCert,
            "2024-10-28",
            79,
        );
        assert!(refile.contains("can be refiled"));

        let restart = reason(
            ViolationType::LaborCertExpired,
            SuggestedAction::RestartRecruitment,
            "2024-10-28",
            79,
        );
        assert!(restart.contains("recruitment must be restarted"));
    }
}
