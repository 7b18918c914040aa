//! The whole pipeline in one call.

use policygap_core::{
    AnalysisConfig, ConfigError, GapReportEntry, InputError, prepare, segment_with_min_length,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::matcher::Matcher;
use crate::summary::{ComplianceSummary, summarize};

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("invalid analysis config: {0}")]
    Config(#[from] ConfigError),
}

/// Gap report of one policy document plus its rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub report: Vec<GapReportEntry>,
    pub summary: ComplianceSummary,
}

/// Segment `document_text`, prepare `raw_clauses`, and build the report.
///
/// Fails only when the config is invalid or a clause record is not a mapping.
pub fn analyze(
    document_text: &str,
    raw_clauses: &[serde_json::Value],
    config: &AnalysisConfig,
) -> Result<Analysis, AnalysisError> {
    config.validate()?;

    let segments = segment_with_min_length(document_text, config.min_segment_length);
    debug!(count = segments.len(), "segmented policy document");

    let clauses = prepare(raw_clauses)?;

    let report = Matcher::new(config.clone()).build_report(&clauses, &segments);
    let summary = summarize(&report);
    info!(
        covered = summary.covered,
        partial = summary.partial,
        missing = summary.missing,
        compliance_pct = summary.compliance_pct,
        "analysis complete"
    );

    Ok(Analysis { report, summary })
}
