//! Gap report types handed to downstream renderers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clause::{ClauseId, display_id};

/// Coverage verdict for one clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coverage {
    /// Best fused score reached the covered threshold.
    Covered,
    /// Some evidence, below the covered threshold.
    Partial,
    /// No segment scored high enough to count.
    Missing,
}

impl Coverage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Covered => "Covered",
            Self::Partial => "Partial",
            Self::Missing => "Missing",
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One report row per clause, in clause input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReportEntry {
    pub clause_id: Option<ClauseId>,
    pub title: Option<String>,
    pub coverage: Coverage,
    /// Winning fused score, rounded to 2 decimal places.
    pub score: f64,
    /// Original-case text of the winning segment, empty when nothing scored.
    pub matched_text: String,
    /// Id of the winning segment.
    pub segment_id: Option<usize>,
}

impl GapReportEntry {
    /// Clause id for display, `-` when the clause had none.
    pub fn display_id(&self) -> String {
        display_id(self.clause_id.as_ref())
    }
}

/// Round a score to 2 decimal places for reporting.
///
/// Exact ties round to the even neighbour, so `0.125` reports as `0.12`.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round_ties_even() / 100.0
}
