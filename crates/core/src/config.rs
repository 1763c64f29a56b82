use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Policy constants ──────────────────────────────────────────

/// Tunable regulatory constants used by window derivation and enforcement.
///
/// Defaults encode the standard PERM timeline; each value can be overridden
/// via environment variable (call [`load_dotenv`] first). Unparseable
/// overrides fall back to the compiled default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyConfig {
    /// Days that must elapse after recruitment ends before the labor
    /// certification may be filed.
    pub quiet_period_days: i64,
    /// Days after recruitment starts within which the labor certification
    /// must be filed.
    pub filing_window_days: i64,
    /// Days after recruitment starts within which recruitment activities
    /// must conclude (filing window minus the quiet period).
    pub recruitment_window_days: i64,
    /// Validity of a labor certification after the certification date.
    pub labor_cert_validity_days: i64,
    /// Minimum remaining wage-determination runway, in days, for a restart
    /// to be recommended. Strictly greater-than; exactly this many days out
    /// is not restartable.
    pub restart_runway_days: i64,
    /// Maximum entries retained by the in-memory evaluation audit log.
    pub audit_log_capacity: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            quiet_period_days: 30,
            filing_window_days: 180,
            recruitment_window_days: 150,
            labor_cert_validity_days: 180,
            restart_runway_days: 60,
            audit_log_capacity: 500,
        }
    }
}

impl PolicyConfig {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            quiet_period_days: env_i64("PERMTRACK_QUIET_PERIOD_DAYS", defaults.quiet_period_days),
            filing_window_days: env_i64(
                "PERMTRACK_FILING_WINDOW_DAYS",
                defaults.filing_window_days,
            ),
            recruitment_window_days: env_i64(
                "PERMTRACK_RECRUITMENT_WINDOW_DAYS",
                defaults.recruitment_window_days,
            ),
            labor_cert_validity_days: env_i64(
                "PERMTRACK_LABOR_CERT_VALIDITY_DAYS",
                defaults.labor_cert_validity_days,
            ),
            restart_runway_days: env_i64(
                "PERMTRACK_RESTART_RUNWAY_DAYS",
                defaults.restart_runway_days,
            ),
            audit_log_capacity: env_usize(
                "PERMTRACK_AUDIT_LOG_CAPACITY",
                defaults.audit_log_capacity,
            ),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Policy config loaded:");
        tracing::info!("  quiet period:        {} days", self.quiet_period_days);
        tracing::info!("  filing window:       {} days", self.filing_window_days);
        tracing::info!("  recruitment window:  {} days", self.recruitment_window_days);
        tracing::info!("  labor cert validity: {} days", self.labor_cert_validity_days);
        tracing::info!("  restart runway:      {} days", self.restart_runway_days);
        tracing::info!("  audit log capacity:  {}", self.audit_log_capacity);
    }

    /// View safe for API responses.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "quiet_period_days": self.quiet_period_days,
            "filing_window_days": self.filing_window_days,
            "recruitment_window_days": self.recruitment_window_days,
            "labor_cert_validity_days": self.labor_cert_validity_days,
            "restart_runway_days": self.restart_runway_days,
            "audit_log_capacity": self.audit_log_capacity,
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_encode_standard_timeline() {
        let config = PolicyConfig::default();
        assert_eq!(config.quiet_period_days, 30);
        assert_eq!(config.filing_window_days, 180);
        assert_eq!(
            config.recruitment_window_days,
            config.filing_window_days - config.quiet_period_days
        );
        assert_eq!(config.restart_runway_days, 60);
    }

    #[test]
    fn env_override_with_bad_value_falls_back() {
        // Serialized env mutation; keys are unique to this test.
        std::env::set_var("PERMTRACK_QUIET_PERIOD_DAYS", "not-a-number");
        let config = PolicyConfig::from_env();
        assert_eq!(config.quiet_period_days, 30);
        std::env::remove_var("PERMTRACK_QUIET_PERIOD_DAYS");
    }
}
