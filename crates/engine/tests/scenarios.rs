//! End-to-end scenarios exercising extraction, urgency grouping,
//! enforcement, and the audit log together on realistic case snapshots.

use permtrack_core::{
    AgencyRequest, CaseProgress, CaseSnapshot, CaseStage, DeadlineType, PolicyConfig,
    SuggestedAction, Urgency, ViolationType,
};
use permtrack_engine::audit_log::{AuditLog, NullSink};
use permtrack_engine::deadlines::DeadlineExtractor;
use permtrack_engine::enforcement::{can_restart, EnforcementEvaluator};
use permtrack_engine::summary::summarize;
use permtrack_engine::urgency::group_by_urgency;

const TODAY: &str = "2025-01-15";

fn case(stage: CaseStage, progress: CaseProgress) -> CaseSnapshot {
    CaseSnapshot::new(stage, progress)
}

fn config() -> PolicyConfig {
    PolicyConfig::default()
}

// ── Dashboard extraction ────────────────────────────────────────────

#[test]
fn pwd_expiring_this_week_shows_up_once() {
    let mut snapshot = case(CaseStage::Recruitment, CaseProgress::Working);
    snapshot.pwd_expiration_date = Some("2025-01-20".into());

    let deadlines = DeadlineExtractor::extract(&snapshot, TODAY, &config(), &NullSink);

    assert_eq!(deadlines.len(), 1);
    assert_eq!(deadlines[0].deadline_type, DeadlineType::WageDetExpiration);
    assert_eq!(deadlines[0].days_until, 5);
    assert_eq!(deadlines[0].urgency, Urgency::ThisWeek);
}

#[test]
fn filing_the_labor_cert_supersedes_the_pwd_deadline() {
    let mut snapshot = case(CaseStage::LaborCertFiling, CaseProgress::Working);
    snapshot.pwd_expiration_date = Some("2025-03-01".into());

    let before = DeadlineExtractor::extract(&snapshot, TODAY, &config(), &NullSink);
    assert!(before
        .iter()
        .any(|d| d.deadline_type == DeadlineType::WageDetExpiration));

    snapshot.labor_cert_filed_date = Some("2025-01-10".into());
    let after = DeadlineExtractor::extract(&snapshot, TODAY, &config(), &NullSink);
    assert!(after
        .iter()
        .all(|d| d.deadline_type != DeadlineType::WageDetExpiration));
}

#[test]
fn derived_filing_window_appears_without_stored_dates() {
    let mut snapshot = case(CaseStage::Recruitment, CaseProgress::Working);
    snapshot.recruitment_start_date = Some("2024-12-01".into());
    snapshot.recruitment_end_date = Some("2025-01-10".into());
    snapshot.pwd_expiration_date = Some("2025-08-01".into());

    let deadlines = DeadlineExtractor::extract(&snapshot, TODAY, &config(), &NullSink);
    let opens = deadlines
        .iter()
        .find(|d| d.deadline_type == DeadlineType::FilingWindowOpens)
        .expect("filing window opens");
    // Quiet period: 2025-01-10 + 30.
    assert_eq!(opens.due_date, "2025-02-09");

    let closes = deadlines
        .iter()
        .find(|d| d.deadline_type == DeadlineType::FilingWindowCloses)
        .expect("filing window closes");
    // 2024-12-01 + 180 = 2025-05-30, earlier than the PWD expiration.
    assert_eq!(closes.due_date, "2025-05-30");
}

#[test]
fn grouping_buckets_a_mixed_dashboard() {
    let mut snapshot = case(CaseStage::LaborCertFiling, CaseProgress::Working);
    snapshot.pwd_expiration_date = Some("2025-03-15".into()); // 59 days -> later
    snapshot.filing_window_closes_date = Some("2025-02-01".into()); // 17 -> this month
    snapshot.rfi_requests = vec![AgencyRequest {
        received_date: Some("2024-12-20".into()),
        response_due_date: Some("2025-01-10".into()), // -5 -> overdue
        response_submitted_date: None,
    }];
    snapshot.rfe_requests = vec![AgencyRequest {
        received_date: Some("2025-01-02".into()),
        response_due_date: Some("2025-01-17".into()), // 2 -> this week
        response_submitted_date: None,
    }];

    let deadlines = DeadlineExtractor::extract(&snapshot, TODAY, &config(), &NullSink);
    let groups = group_by_urgency(deadlines);

    assert_eq!(groups.total, 4);
    assert_eq!(groups.overdue.len(), 1);
    assert_eq!(groups.this_week.len(), 1);
    assert_eq!(groups.this_month.len(), 1);
    assert_eq!(groups.later.len(), 1);
    assert_eq!(groups.overdue[0].deadline_type, DeadlineType::RfiDue);
    assert_eq!(groups.this_week[0].deadline_type, DeadlineType::RfeDue);
}

// ── Enforcement scenarios ───────────────────────────────────────────

#[test]
fn stale_recruitment_with_runway_recommends_restart() {
    let mut snapshot = case(CaseStage::Recruitment, CaseProgress::Working);
    snapshot.recruitment_window_closes_date = Some("2025-01-05".into());
    snapshot.pwd_expiration_date = Some("2025-04-15".into());

    assert!(can_restart(
        snapshot.pwd_expiration_date.as_deref(),
        TODAY,
        &config()
    ));

    let violation = EnforcementEvaluator::evaluate(&snapshot, TODAY, &config(), &NullSink)
        .expect("violation");
    assert_eq!(
        violation.violation_type,
        ViolationType::RecruitmentWindowMissed
    );
    assert_eq!(violation.action, SuggestedAction::RestartRecruitment);
    assert!(violation.restart_feasible);
}

#[test]
fn expired_pwd_outranks_every_other_breach() {
    let mut snapshot = case(CaseStage::Recruitment, CaseProgress::Working);
    snapshot.pwd_expiration_date = Some("2024-12-01".into());
    snapshot.recruitment_window_closes_date = Some("2024-11-01".into());
    snapshot.filing_window_closes_date = Some("2024-11-15".into());

    let violation = EnforcementEvaluator::evaluate(&snapshot, TODAY, &config(), &NullSink)
        .expect("violation");
    assert_eq!(violation.violation_type, ViolationType::WageDetExpired);
    assert_eq!(violation.action, SuggestedAction::Close);
    assert!(!violation.restart_feasible);
}

#[test]
fn healthy_case_has_deadlines_but_no_violation() {
    let mut snapshot = case(CaseStage::Recruitment, CaseProgress::Working);
    snapshot.recruitment_start_date = Some("2025-01-01".into());
    snapshot.pwd_expiration_date = Some("2025-08-01".into());

    let deadlines = DeadlineExtractor::extract(&snapshot, TODAY, &config(), &NullSink);
    assert!(!deadlines.is_empty());

    let violation = EnforcementEvaluator::evaluate(&snapshot, TODAY, &config(), &NullSink);
    assert_eq!(violation, None);
}

// ── Failure isolation across the whole pipeline ─────────────────────

#[test]
fn one_corrupt_date_never_hides_the_rest_of_the_case() {
    let mut snapshot = case(CaseStage::LaborCertFiling, CaseProgress::Working);
    snapshot.pwd_expiration_date = Some("03/15/2025".into()); // wrong format
    snapshot.filing_window_closes_date = Some("2025-01-02".into());
    snapshot.rfe_requests = vec![AgencyRequest {
        received_date: Some("2025-01-02".into()),
        response_due_date: Some("2025-01-17".into()),
        response_submitted_date: None,
    }];

    let log = AuditLog::new(50);
    let deadlines = DeadlineExtractor::extract(&snapshot, TODAY, &config(), &log);

    let types: Vec<DeadlineType> = deadlines.iter().map(|d| d.deadline_type).collect();
    assert_eq!(
        types,
        vec![DeadlineType::FilingWindowCloses, DeadlineType::RfeDue]
    );

    let entries = log.snapshot();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].case_id, Some(snapshot.id));

    // Enforcement still fires on the intact filing window date, and logs
    // its own skip for the corrupt expiration.
    let violation =
        EnforcementEvaluator::evaluate(&snapshot, TODAY, &config(), &log).expect("violation");
    assert_eq!(violation.violation_type, ViolationType::FilingWindowMissed);
    assert_eq!(log.snapshot().len(), 2);
}

// ── Caseload summary ────────────────────────────────────────────────

#[test]
fn caseload_summary_matches_the_dashboard_contract() {
    let mut cases = vec![
        case(CaseStage::WageDetermination, CaseProgress::Working),
        case(CaseStage::WageDetermination, CaseProgress::Filed),
        case(CaseStage::WageDetermination, CaseProgress::Filed),
        case(CaseStage::Recruitment, CaseProgress::Working),
        case(CaseStage::ImmigrantPetition, CaseProgress::Complete),
        case(CaseStage::Closed, CaseProgress::Complete),
    ];
    let original_id = cases[0].id;
    cases[3].duplicate_of = Some(original_id);

    let summary = summarize(&cases);
    assert_eq!(summary.wage_determination.subtext, "1 working, 2 filed");
    assert_eq!(summary.wage_determination.percent_complete, 67);
    assert_eq!(summary.recruitment.subtext, "1 running, 1 duplicate");
    assert_eq!(summary.immigrant_petition.percent_complete, 100);
    assert_eq!(summary.closed_count, 1);
    assert_eq!(summary.total_cases, 6);
}
