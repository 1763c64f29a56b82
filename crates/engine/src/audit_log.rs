//! Injected diagnostic capability for recoverable per-item failures.
//!
//! The engine never owns a global logger. Extraction and enforcement take a
//! [`DiagnosticSink`] and report skipped checks through it; the returned
//! values are identical whether the sink stores, forwards, or drops every
//! entry. [`AuditLog`] is the in-memory implementation, capped with FIFO
//! eviction and behind `std::sync::RwLock` so it can be shared across a
//! worker pool.

use std::collections::VecDeque;
use std::fmt;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity level for diagnostic entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Numeric severity for comparison (higher = more severe).
    pub fn as_severity(&self) -> u8 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warning => 2,
            LogLevel::Error => 3,
        }
    }
}

/// Engine phase that produced the entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnginePhase {
    Extraction,
    Enforcement,
    Summary,
}

impl fmt::Display for EnginePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnginePhase::Extraction => write!(f, "extraction"),
            EnginePhase::Enforcement => write!(f, "enforcement"),
            EnginePhase::Summary => write!(f, "summary"),
        }
    }
}

/// A single diagnostic entry.
///
/// Carries no wall-clock timestamp: identical inputs must produce identical
/// entries, and the engine reads no clock.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<Uuid>,
    pub level: LogLevel,
    pub phase: EnginePhase,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEntry {
    pub fn new(level: LogLevel, phase: EnginePhase, message: impl Into<String>) -> Self {
        Self {
            case_id: None,
            level,
            phase,
            message: message.into(),
            details: None,
        }
    }

    pub fn for_case(
        case_id: Uuid,
        level: LogLevel,
        phase: EnginePhase,
        message: impl Into<String>,
    ) -> Self {
        Self {
            case_id: Some(case_id),
            ..Self::new(level, phase, message)
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

// ── Sink trait and implementations ──────────────────────────────────

/// Receives best-effort diagnostics from the engine.
///
/// Implementations must not influence engine results; the engine behaves
/// identically with a no-op sink.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, entry: LogEntry);
}

/// Drops every entry. The engine must function correctly with this sink.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _entry: LogEntry) {}
}

/// Forwards entries to `tracing` at the mapped level.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, entry: LogEntry) {
        match entry.level {
            LogLevel::Debug => tracing::debug!(
                case_id = ?entry.case_id,
                phase = %entry.phase,
                "{}",
                entry.message
            ),
            LogLevel::Info => tracing::info!(
                case_id = ?entry.case_id,
                phase = %entry.phase,
                "{}",
                entry.message
            ),
            LogLevel::Warning => tracing::warn!(
                case_id = ?entry.case_id,
                phase = %entry.phase,
                "{}",
                entry.message
            ),
            LogLevel::Error => tracing::error!(
                case_id = ?entry.case_id,
                phase = %entry.phase,
                "{}",
                entry.message
            ),
        }
    }
}

// ── In-memory audit log ─────────────────────────────────────────────

/// Capped in-memory diagnostic store with FIFO eviction.
///
/// Thread-safe via `std::sync::RwLock`, so it can be shared across worker
/// threads evaluating cases in parallel. Recording is best-effort: a
/// poisoned lock drops the entry rather than panicking.
pub struct AuditLog {
    capacity: usize,
    entries: RwLock<VecDeque<LogEntry>>,
}

impl AuditLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(VecDeque::new()),
        }
    }

    /// Copy of all retained entries, oldest first.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries
            .read()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Retained entries at or above `min_level`, oldest first.
    pub fn entries_at_least(&self, min_level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .read()
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.level.as_severity() >= min_level.as_severity())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for AuditLog {
    fn record(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push_back(entry);
            while entries.len() > self.capacity {
                entries.pop_front();
            }
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        LogEntry::new(level, EnginePhase::Extraction, message)
    }

    #[test]
    fn caps_with_fifo_eviction() {
        let log = AuditLog::new(3);
        for i in 0..5 {
            log.record(entry(LogLevel::Info, &format!("entry {}", i)));
        }
        let entries = log.snapshot();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "entry 2");
        assert_eq!(entries[2].message, "entry 4");
    }

    #[test]
    fn filters_by_minimum_severity() {
        let log = AuditLog::new(10);
        log.record(entry(LogLevel::Debug, "noise"));
        log.record(entry(LogLevel::Warning, "skipped a check"));
        log.record(entry(LogLevel::Error, "bad"));

        let warnings = log.entries_at_least(LogLevel::Warning);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|e| e.level != LogLevel::Debug));
    }

    #[test]
    fn entry_serializes_without_empty_fields() {
        let json = serde_json::to_value(entry(LogLevel::Warning, "msg")).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["phase"], "extraction");
        assert!(json.get("case_id").is_none());
        assert!(json.get("details").is_none());
    }
}
