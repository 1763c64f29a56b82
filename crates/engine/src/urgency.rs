//! Urgency classification and grouping over day distances.
//!
//! [`group_by_urgency`] is generic over anything carrying a signed
//! days-until value, so the same partitioning serves single-case dashboard
//! deadlines and cross-case upcoming-deadline queries.

use permtrack_core::{Deadline, Urgency};
use serde::Serialize;

/// Bucket a signed day distance. Boundaries are fixed: negative is overdue,
/// 0..=7 this week, 8..=30 this month, beyond that later.
pub fn classify(days_until: i64) -> Urgency {
    match days_until {
        d if d < 0 => Urgency::Overdue,
        0..=7 => Urgency::ThisWeek,
        8..=30 => Urgency::ThisMonth,
        _ => Urgency::Later,
    }
}

/// Anything with a signed day distance to its due date.
pub trait DaysUntil {
    fn days_until(&self) -> i64;
}

impl DaysUntil for Deadline {
    fn days_until(&self) -> i64 {
        self.days_until
    }
}

/// The four urgency buckets plus the input count.
///
/// Bucket sizes always sum to `total`.
#[derive(Debug, Clone, Serialize)]
pub struct UrgencyGroups<T> {
    pub overdue: Vec<T>,
    pub this_week: Vec<T>,
    pub this_month: Vec<T>,
    pub later: Vec<T>,
    pub total: usize,
}

/// Partition `items` into urgency buckets, each sorted ascending by
/// days-until (stable; ties keep input order).
pub fn group_by_urgency<T: DaysUntil>(items: Vec<T>) -> UrgencyGroups<T> {
    let mut groups = UrgencyGroups {
        overdue: Vec::new(),
        this_week: Vec::new(),
        this_month: Vec::new(),
        later: Vec::new(),
        total: items.len(),
    };

    for item in items {
        match classify(item.days_until()) {
            Urgency::Overdue => groups.overdue.push(item),
            Urgency::ThisWeek => groups.this_week.push(item),
            Urgency::ThisMonth => groups.this_month.push(item),
            Urgency::Later => groups.later.push(item),
        }
    }

    groups.overdue.sort_by_key(DaysUntil::days_until);
    groups.this_week.sort_by_key(DaysUntil::days_until);
    groups.this_month.sort_by_key(DaysUntil::days_until);
    groups.later.sort_by_key(DaysUntil::days_until);

    groups
}

// ── Tests ───────────────────────────────────────────────────────────
