//! Report-level rollups: the gap list and the compliance score.

use std::fmt;

use policygap_core::{Coverage, GapReportEntry};
use serde::{Deserialize, Serialize};

/// Compliance percentage at or above which risk is `Low`.
pub const LOW_RISK_PCT: u32 = 80;
/// Compliance percentage at or above which risk is `Moderate`.
pub const MODERATE_RISK_PCT: u32 = 50;

/// Overall risk band derived from the compliance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_compliance_pct(pct: u32) -> Self {
        if pct >= LOW_RISK_PCT {
            Self::Low
        } else if pct >= MODERATE_RISK_PCT {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coverage counts and the derived compliance score of one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub total: usize,
    pub covered: usize,
    pub partial: usize,
    pub missing: usize,
    /// Share of `Covered` clauses, rounded to a whole percent.
    pub compliance_pct: u32,
    pub risk: RiskLevel,
}

/// Entries not classified `Covered`, in report order.
pub fn gaps(report: &[GapReportEntry]) -> Vec<&GapReportEntry> {
    report
        .iter()
        .filter(|e| e.coverage != Coverage::Covered)
        .collect()
}

/// Count coverage bands and derive the compliance score.
///
/// Only `Covered` clauses count towards compliance. Half percents round to
/// the even neighbour. An empty report scores 0.
pub fn summarize(report: &[GapReportEntry]) -> ComplianceSummary {
    let count = |c: Coverage| report.iter().filter(|e| e.coverage == c).count();
    let covered = count(Coverage::Covered);
    let partial = count(Coverage::Partial);
    let missing = count(Coverage::Missing);
    let total = report.len();

    let compliance_pct = if total == 0 {
        0
    } else {
        (covered as f64 / total as f64 * 100.0).round_ties_even() as u32
    };

    ComplianceSummary {
        total,
        covered,
        partial,
        missing,
        compliance_pct,
        risk: RiskLevel::from_compliance_pct(compliance_pct),
    }
}
