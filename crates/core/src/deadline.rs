//! Deadline record types produced by the extractor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six obligation kinds a case can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeadlineType {
    WageDetExpiration,
    FilingWindowOpens,
    FilingWindowCloses,
    PetitionFilingDeadline,
    RfiDue,
    RfeDue,
}

/// Extraction order. Ties on `days_until` keep this order in sorted output.
pub const DEADLINE_TYPES: [DeadlineType; 6] = [
    DeadlineType::WageDetExpiration,
    DeadlineType::FilingWindowOpens,
    DeadlineType::FilingWindowCloses,
    DeadlineType::PetitionFilingDeadline,
    DeadlineType::RfiDue,
    DeadlineType::RfeDue,
];

impl DeadlineType {
    /// Short display label for dashboards and reminders.
    pub fn label(&self) -> &'static str {
        match self {
            DeadlineType::WageDetExpiration => "Wage determination expires",
            DeadlineType::FilingWindowOpens => "Filing window opens",
            DeadlineType::FilingWindowCloses => "Filing window closes",
            DeadlineType::PetitionFilingDeadline => "Petition filing deadline",
            DeadlineType::RfiDue => "RFI response due",
            DeadlineType::RfeDue => "RFE response due",
        }
    }
}

impl fmt::Display for DeadlineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadlineType::WageDetExpiration => write!(f, "wage-det-expiration"),
            DeadlineType::FilingWindowOpens => write!(f, "filing-window-opens"),
            DeadlineType::FilingWindowCloses => write!(f, "filing-window-closes"),
            DeadlineType::PetitionFilingDeadline => write!(f, "petition-filing-deadline"),
            DeadlineType::RfiDue => write!(f, "rfi-due"),
            DeadlineType::RfeDue => write!(f, "rfe-due"),
        }
    }
}

/// Urgency bucket derived from a deadline's signed day distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Overdue,
    ThisWeek,
    ThisMonth,
    Later,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Overdue => write!(f, "overdue"),
            Urgency::ThisWeek => write!(f, "this_week"),
            Urgency::ThisMonth => write!(f, "this_month"),
            Urgency::Later => write!(f, "later"),
        }
    }
}

/// A single live obligation on a case, relative to a reference date.
///
/// Computed fresh on every extraction call; never cached or mutated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Deadline {
    pub deadline_type: DeadlineType,
    pub label: String,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: String,
    /// Signed day distance from the reference date (negative = overdue).
    pub days_until: i64,
    pub urgency: Urgency,
}
