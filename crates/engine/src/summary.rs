//! Single-pass pipeline summaries: per-stage breakdown counts and short
//! status strings for the caseload dashboard.

use permtrack_core::{CaseProgress, CaseSnapshot, CaseStage};
use serde::Serialize;

/// Business bucket name for a (stage, progress) pair.
///
/// This table is fixed by the dashboard contract; it is not derived from
/// the enum names.
pub fn bucket_name(stage: CaseStage, progress: CaseProgress) -> &'static str {
    match (stage, progress) {
        (CaseStage::WageDetermination, CaseProgress::Working) => "working",
        (CaseStage::WageDetermination, _) => "filed",
        (CaseStage::Recruitment, CaseProgress::Working) => "running",
        (CaseStage::Recruitment, _) => "completed",
        (CaseStage::LaborCertFiling, CaseProgress::Working) => "preparing",
        (CaseStage::LaborCertFiling, _) => "filed",
        (CaseStage::ImmigrantPetition, CaseProgress::Working) => "preparing",
        (CaseStage::ImmigrantPetition, _) => "filed",
        (CaseStage::Closed, _) => "closed",
    }
}

/// Counts and display strings for a single stage.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StageBreakdown {
    /// Cases still in preparation for this stage.
    pub working: usize,
    /// Cases whose governing filing (or equivalent) has happened.
    pub filed: usize,
    /// Cases in this stage carrying a duplicate marker.
    pub duplicates: usize,
    pub total: usize,
    /// Non-zero parts joined with ", "; empty when the stage is empty.
    pub subtext: String,
    /// `round(filed / total * 100)`; 0 when the stage is empty.
    pub percent_complete: u32,
}

impl StageBreakdown {
    fn add(&mut self, case: &CaseSnapshot) {
        self.total += 1;
        match case.progress {
            CaseProgress::Working => self.working += 1,
            CaseProgress::Filed | CaseProgress::Complete => self.filed += 1,
        }
        if case.duplicate_of.is_some() {
            self.duplicates += 1;
        }
    }

    fn finalize(&mut self, stage: CaseStage) {
        let mut parts = Vec::new();
        if self.working > 0 {
            parts.push(format!(
                "{} {}",
                self.working,
                bucket_name(stage, CaseProgress::Working)
            ));
        }
        if self.filed > 0 {
            parts.push(format!(
                "{} {}",
                self.filed,
                bucket_name(stage, CaseProgress::Filed)
            ));
        }
        if self.duplicates > 0 {
            let word = if self.duplicates == 1 {
                "duplicate"
            } else {
                "duplicates"
            };
            parts.push(format!("{} {}", self.duplicates, word));
        }
        self.subtext = parts.join(", ");
        self.percent_complete = if self.total == 0 {
            0
        } else {
            ((self.filed as f64 / self.total as f64) * 100.0).round() as u32
        };
    }
}

/// Per-stage breakdowns for a case collection.
///
/// Deleted cases are excluded from every count; closed cases contribute
/// only to `closed_count`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PipelineSummary {
    pub wage_determination: StageBreakdown,
    pub recruitment: StageBreakdown,
    pub labor_cert_filing: StageBreakdown,
    pub immigrant_petition: StageBreakdown,
    pub closed_count: usize,
    pub deleted_count: usize,
    /// Non-deleted cases, closed included.
    pub total_cases: usize,
}

impl PipelineSummary {
    fn stage_mut(&mut self, stage: CaseStage) -> Option<&mut StageBreakdown> {
        match stage {
            CaseStage::WageDetermination => Some(&mut self.wage_determination),
            CaseStage::Recruitment => Some(&mut self.recruitment),
            CaseStage::LaborCertFiling => Some(&mut self.labor_cert_filing),
            CaseStage::ImmigrantPetition => Some(&mut self.immigrant_petition),
            CaseStage::Closed => None,
        }
    }
}

/// Build the dashboard summary in a single pass over `cases`.
pub fn summarize(cases: &[CaseSnapshot]) -> PipelineSummary {
    let mut summary = PipelineSummary::default();

    for case in cases {
        if case.is_deleted() {
            summary.deleted_count += 1;
            continue;
        }
        summary.total_cases += 1;
        match summary.stage_mut(case.stage) {
            Some(breakdown) => breakdown.add(case),
            None => summary.closed_count += 1,
        }
    }

    summary.wage_determination.finalize(CaseStage::WageDetermination);
    summary.recruitment.finalize(CaseStage::Recruitment);
    summary.labor_cert_filing.finalize(CaseStage::LaborCertFiling);
    summary.immigrant_petition.finalize(CaseStage::ImmigrantPetition);

    summary
}

// ── Tests ───────────────────────────────────────────────────────────
