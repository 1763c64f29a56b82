//! Enforcement evaluation: decides whether an unattended case has breached
//! a deadline badly enough to require closure or a restart.
//!
//! Four checks run in fixed priority order; the first that fires wins and
//! later checks are not evaluated, so at most one violation is ever
//! returned per case. Checks inspect the snapshot directly rather than the
//! extracted deadline list, since enforcement must see breaches even when
//! extraction skipped a record.
//!
//! "Expired" and "closed" mean strictly before the reference date; a
//! deadline falling on the reference date itself has not been breached.

mod messages;

use permtrack_core::{CaseSnapshot, PolicyConfig, SuggestedAction, Violation, ViolationType};

use crate::audit_log::{DiagnosticSink, EnginePhase, LogEntry, LogLevel};
use crate::dates::{day_difference, try_add_days, try_day_difference};
use crate::windows;

/// Whether enough wage-determination runway remains to restart the process.
///
/// True only when a valid expiration date is present and strictly more than
/// the configured runway remains; exactly the runway is not restartable.
/// Missing or malformed input is never "safe to restart".
pub fn can_restart(pwd_expiration: Option<&str>, today: &str, config: &PolicyConfig) -> bool {
    match pwd_expiration.and_then(|date| try_day_difference(today, date)) {
        Some(days) => days > config.restart_runway_days,
        None => false,
    }
}

type Check = fn(&CaseSnapshot, &str, &PolicyConfig, &dyn DiagnosticSink) -> Option<Violation>;

/// Priority order. Earlier violations preempt later ones.
const CHECKS: [Check; 4] = [
    check_pwd_expired,
    check_recruitment_window,
    check_filing_window,
    check_labor_cert_expired,
];

/// Evaluates a case snapshot against the violation table.
pub struct EnforcementEvaluator;

impl EnforcementEvaluator {
    /// The highest-priority violation for `case`, or `None`.
    ///
    /// Closed and deleted cases are skipped immediately. A malformed date
    /// inside a single check is reported to `sink` and treated as that
    /// check not firing; later checks still run.
    pub fn evaluate(
        case: &CaseSnapshot,
        today: &str,
        config: &PolicyConfig,
        sink: &dyn DiagnosticSink,
    ) -> Option<Violation> {
        if case.is_closed() || case.is_deleted() {
            return None;
        }
        CHECKS
            .iter()
            .find_map(|check| check(case, today, config, sink))
    }
}

// ── Checks, in priority order ───────────────────────────────────────

/// 1. Wage determination expired before the labor certification was filed.
/// Terminal: no remedy is defined, so restart is always infeasible.
fn check_pwd_expired(
    case: &CaseSnapshot,
    today: &str,
    _config: &PolicyConfig,
    sink: &dyn DiagnosticSink,
) -> Option<Violation> {
    if case.labor_cert_filed_date.is_some() {
        return None;
    }
    let due = case.pwd_expiration_date.as_deref()?;
    let overdue = days_past(due, today, case, "wage determination expiry", sink)?;
    Some(build(
        ViolationType::WageDetExpired,
        SuggestedAction::Close,
        false,
        due,
        overdue,
    ))
}

/// 2. Recruitment window closed with no labor certification filed.
fn check_recruitment_window(
    case: &CaseSnapshot,
    today: &str,
    config: &PolicyConfig,
    sink: &dyn DiagnosticSink,
) -> Option<Violation> {
    if case.labor_cert_filed_date.is_some() {
        return None;
    }
    let due = windows::recruitment_window_closes(case, config)?;
    let overdue = days_past(&due, today, case, "recruitment window close", sink)?;
    let feasible = can_restart(case.pwd_expiration_date.as_deref(), today, config);
    let action = if feasible {
        SuggestedAction::RestartRecruitment
    } else {
        SuggestedAction::Close
    };
    Some(build(
        ViolationType::RecruitmentWindowMissed,
        action,
        feasible,
        &due,
        overdue,
    ))
}

/// 3. Filing window closed with no labor certification filed.
fn check_filing_window(
    case: &CaseSnapshot,
    today: &str,
    config: &PolicyConfig,
    sink: &dyn DiagnosticSink,
) -> Option<Violation> {
    if case.labor_cert_filed_date.is_some() {
        return None;
    }
    let due = windows::filing_window_closes(case, config)?;
    let overdue = days_past(&due, today, case, "filing window close", sink)?;
    let feasible = can_restart(case.pwd_expiration_date.as_deref(), today, config);
    let action = if feasible {
        SuggestedAction::RestartRecruitment
    } else {
        SuggestedAction::Close
    };
    Some(build(
        ViolationType::FilingWindowMissed,
        action,
        feasible,
        &due,
        overdue,
    ))
}

/// 4. Labor certification expired before the immigrant petition was filed.
///
/// When restart is feasible the remedy depends on the filing window: still
/// open or unset means the certification can simply be refiled, a closed
/// window forces recruitment to restart first.
fn check_labor_cert_expired(
    case: &CaseSnapshot,
    today: &str,
    config: &PolicyConfig,
    sink: &dyn DiagnosticSink,
) -> Option<Violation> {
    if case.petition_filed_date.is_some() {
        return None;
    }
    let due = labor_cert_expiry(case, config)?;
    let overdue = days_past(&due, today, case, "labor certification expiry", sink)?;
    let feasible = can_restart(case.pwd_expiration_date.as_deref(), today, config);
    let action = if feasible {
        let window_passed = windows::filing_window_closes(case, config)
            .as_deref()
            .and_then(|close| try_day_difference(today, close))
            .is_some_and(|days| days < 0);
        if window_passed {
            SuggestedAction::RestartRecruitment
        } else {
            SuggestedAction::RestartLaborCert
        }
    } else {
        SuggestedAction::Close
    };
    Some(build(
        ViolationType::LaborCertExpired,
        action,
        feasible,
        &due,
        overdue,
    ))
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Labor certification expiry: stored value wins, else certification date
/// plus the configured validity.
fn labor_cert_expiry(case: &CaseSnapshot, config: &PolicyConfig) -> Option<String> {
    if let Some(stored) = &case.labor_cert_expiration_date {
        return Some(stored.clone());
    }
    case.labor_cert_certified_date
        .as_deref()
        .and_then(|certified| try_add_days(certified, config.labor_cert_validity_days))
}

/// Days by which `due` is strictly past `today`, or `None` when it is not.
/// Parse failures are reported to the sink; the check simply does not fire.
fn days_past(
    due: &str,
    today: &str,
    case: &CaseSnapshot,
    context: &str,
    sink: &dyn DiagnosticSink,
) -> Option<i64> {
    match day_difference(today, due) {
        Ok(days) if days < 0 => Some(-days),
        Ok(_) => None,
        Err(err) => {
            sink.record(LogEntry::for_case(
                case.id,
                LogLevel::Warning,
                EnginePhase::Enforcement,
                format!("skipping {} check: {}", context, err),
            ));
            None
        }
    }
}

fn build(
    violation_type: ViolationType,
    action: SuggestedAction,
    restart_feasible: bool,
    due_date: &str,
    days_overdue: i64,
) -> Violation {
    Violation {
        violation_type,
        title: messages::title(violation_type).to_string(),
        reason: messages::reason(violation_type, action, due_date, days_overdue),
        action,
        restart_feasible,
    }
}

// ── Tests ───────────────────────────────────────────────────────────
