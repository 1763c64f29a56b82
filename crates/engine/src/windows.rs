//! Stored-else-derived precedence for recruitment and filing window dates.
//!
//! A stored window date always wins, even over a derivable one: the two can
//! legitimately diverge after a manual edit, and the stored value is the one
//! attorneys signed off on. Derivation only fills the gap when nothing is
//! stored. Stored values are returned verbatim; consumers apply their own
//! parse-failure isolation.

use permtrack_core::{CaseSnapshot, PolicyConfig};

use crate::dates::{min_date, try_add_days};

/// First day the labor certification may be filed: stored override, else
/// the quiet period after recruitment ends.
pub fn filing_window_opens(case: &CaseSnapshot, config: &PolicyConfig) -> Option<String> {
    if let Some(stored) = &case.filing_window_opens_date {
        return Some(stored.clone());
    }
    case.recruitment_end_date
        .as_deref()
        .and_then(|end| try_add_days(end, config.quiet_period_days))
}

/// Last day the labor certification may be filed: stored override, else the
/// earlier of (recruitment start + filing window) and the wage-determination
/// expiration. Either derived input alone suffices when the other is absent.
pub fn filing_window_closes(case: &CaseSnapshot, config: &PolicyConfig) -> Option<String> {
    if let Some(stored) = &case.filing_window_closes_date {
        return Some(stored.clone());
    }
    let from_start = case
        .recruitment_start_date
        .as_deref()
        .and_then(|start| try_add_days(start, config.filing_window_days));
    min_date([from_start.as_deref(), case.pwd_expiration_date.as_deref()])
}

/// Last day recruitment activities may conclude: stored override, else the
/// recruitment window after the recruitment start.
pub fn recruitment_window_closes(case: &CaseSnapshot, config: &PolicyConfig) -> Option<String> {
    if let Some(stored) = &case.recruitment_window_closes_date {
        return Some(stored.clone());
    }
    case.recruitment_start_date
        .as_deref()
        .and_then(|start| try_add_days(start, config.recruitment_window_days))
}

// ── Tests ───────────────────────────────────────────────────────────
