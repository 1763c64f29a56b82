//! Deadline extraction: the full list of live obligations for a case.
//!
//! Extraction is per-type isolated: a malformed date behind one deadline
//! type is reported to the injected sink and that type alone is skipped.
//! The caller always gets back whatever else resolved cleanly, never an
//! error.

use permtrack_core::{CaseSnapshot, Deadline, DeadlineType, PolicyConfig, DEADLINE_TYPES};
use serde::Serialize;
use uuid::Uuid;

use crate::audit_log::{DiagnosticSink, EnginePhase, LogEntry, LogLevel};
use crate::dates::day_difference;
use crate::supersession::{deadline_status, outstanding_request};
use crate::urgency::{classify, DaysUntil};
use crate::windows;

/// A deadline paired with the case that carries it, for cross-case queries.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseDeadline {
    pub case_id: Uuid,
    pub deadline: Deadline,
}

impl DaysUntil for CaseDeadline {
    fn days_until(&self) -> i64 {
        self.deadline.days_until
    }
}

/// Extracts live deadlines from case snapshots.
///
/// `today` is the caller-injected reference date (`YYYY-MM-DD`); the
/// extractor never reads a wall clock.
pub struct DeadlineExtractor;

impl DeadlineExtractor {
    /// All live deadlines for one case, sorted ascending by days-until
    /// (stable; ties keep extraction order).
    pub fn extract(
        case: &CaseSnapshot,
        today: &str,
        config: &PolicyConfig,
        sink: &dyn DiagnosticSink,
    ) -> Vec<Deadline> {
        let mut deadlines = Vec::new();

        for deadline_type in DEADLINE_TYPES {
            if !deadline_status(deadline_type, case).active {
                continue;
            }
            let Some(due_date) = due_date_for(deadline_type, case, config) else {
                // Missing underlying date: the deadline does not exist.
                continue;
            };
            match day_difference(today, &due_date) {
                Ok(days_until) => deadlines.push(Deadline {
                    deadline_type,
                    label: deadline_type.label().to_string(),
                    due_date,
                    days_until,
                    urgency: classify(days_until),
                }),
                Err(err) => sink.record(
                    LogEntry::for_case(
                        case.id,
                        LogLevel::Warning,
                        EnginePhase::Extraction,
                        format!("skipping {}: {}", deadline_type, err),
                    )
                    .with_details(serde_json::json!({ "due_date": due_date })),
                ),
            }
        }

        deadlines.sort_by_key(|d| d.days_until);
        deadlines
    }

    /// Deadlines across a collection due within `within_days` of `today`
    /// (overdue included), flattened and sorted ascending by days-until.
    pub fn upcoming(
        cases: &[CaseSnapshot],
        today: &str,
        within_days: i64,
        config: &PolicyConfig,
        sink: &dyn DiagnosticSink,
    ) -> Vec<CaseDeadline> {
        let mut all = Vec::new();
        for case in cases {
            for deadline in Self::extract(case, today, config, sink) {
                if deadline.days_until <= within_days {
                    all.push(CaseDeadline {
                        case_id: case.id,
                        deadline,
                    });
                }
            }
        }
        all.sort_by_key(|d| d.deadline.days_until);
        all
    }
}

/// Resolve the due date behind a deadline type. `None` means the deadline
/// does not exist for this case.
fn due_date_for(
    deadline_type: DeadlineType,
    case: &CaseSnapshot,
    config: &PolicyConfig,
) -> Option<String> {
    match deadline_type {
        DeadlineType::WageDetExpiration => case.pwd_expiration_date.clone(),
        DeadlineType::FilingWindowOpens => windows::filing_window_opens(case, config),
        DeadlineType::FilingWindowCloses => windows::filing_window_closes(case, config),
        DeadlineType::PetitionFilingDeadline => case.labor_cert_expiration_date.clone(),
        DeadlineType::RfiDue => {
            outstanding_request(&case.rfi_requests).and_then(|r| r.response_due_date.clone())
        }
        DeadlineType::RfeDue => {
            outstanding_request(&case.rfe_requests).and_then(|r| r.response_due_date.clone())
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────
