//! Deadline and enforcement rule engine for labor-certification cases.
//!
//! This crate provides:
//! - ISO date arithmetic anchored to UTC midnight
//! - Stored-else-derived precedence for recruitment/filing window dates
//! - Supersession rules deciding which deadlines are still live
//! - Deadline extraction with per-type failure isolation
//! - Urgency classification and grouping
//! - Enforcement evaluation with a fixed-priority violation table
//! - Single-pass pipeline summaries
//!
//! Every entry point is pure and synchronous: the caller injects the
//! reference date and a diagnostic sink; the engine performs no I/O and
//! reads no wall clock.

pub mod audit_log;
pub mod dates;
pub mod deadlines;
pub mod enforcement;
pub mod summary;
pub mod supersession;
pub mod urgency;
pub mod windows;
