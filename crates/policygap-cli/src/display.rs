//! Terminal cards and the JSON document for analysis results.

use policygap_core::{AnalysisConfig, Coverage, GapReportEntry, Segment};
use policygap_match::ComplianceSummary;
use serde::Serialize;

/// Matched text longer than this is cut with an ellipsis on cards.
const MAX_MATCH_CHARS: usize = 160;

/// Machine-readable output of `analyze --format json`.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub config: &'a AnalysisConfig,
    pub summary: &'a ComplianceSummary,
    pub gap_report: &'a [GapReportEntry],
    pub gaps: Vec<&'a GapReportEntry>,
}

// ── Cards ──

/// Print one report entry as a vertical card.
pub fn print_entry_card(entry: &GapReportEntry) {
    println!(
        "=== {} [{}] ===",
        entry.display_id(),
        coverage_marker(entry.coverage)
    );
    if let Some(title) = entry.title.as_deref().filter(|t| !t.is_empty()) {
        println!("{title}");
    }
    println!("  {:<26} {:.2}", "score", entry.score);
    match entry.segment_id {
        Some(seg) => {
            println!("  {:<26} {}", "segment", seg);
            println!("  {:<26} {}", "matched_text", truncate(&entry.matched_text, MAX_MATCH_CHARS));
        }
        None => println!("  {:<26} (none)", "matched_text"),
    }
    println!();
}

/// Print the coverage rollup.
pub fn print_summary(summary: &ComplianceSummary) {
    println!("Summary");
    println!("  {:<26} {}", "clauses", summary.total);
    println!("  {:<26} {}", "covered", summary.covered);
    println!("  {:<26} {}", "partial", summary.partial);
    println!("  {:<26} {}", "missing", summary.missing);
    println!("  {:<26} {}%", "compliance", summary.compliance_pct);
    println!("  {:<26} {}", "risk", summary.risk);
}

/// Print kept segments, one per line, with their positional ids.
pub fn print_segments(segments: &[Segment], min_length: usize) {
    println!(
        "{} segments (min length {} chars)",
        segments.len(),
        min_length
    );
    for s in segments {
        println!("  [{:>4}] {}", s.id, s.text);
    }
}

// ── Helpers ──

fn coverage_marker(coverage: Coverage) -> &'static str {
    match coverage {
        Coverage::Covered => "COVERED",
        Coverage::Partial => "PARTIAL",
        Coverage::Missing => "MISSING",
    }
}

/// Cut `text` to at most `max` characters, appending `...` when cut.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte, _)) => format!("{}...", &text[..byte]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policygap_core::ClauseId;
    use policygap_match::summarize;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééééé", 2), "éé...");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn json_report_shape() {
        let report = vec![GapReportEntry {
            clause_id: Some(ClauseId::Text("A.8.24".into())),
            title: Some("Use of cryptography".into()),
            coverage: Coverage::Partial,
            score: 0.41,
            matched_text: "Keys are rotated yearly.".into(),
            segment_id: Some(3),
        }];
        let summary = summarize(&report);
        let config = AnalysisConfig::default();
        let doc = JsonReport {
            generated_at: "2026-01-01T00:00:00+00:00".into(),
            config: &config,
            summary: &summary,
            gap_report: &report,
            gaps: policygap_match::gaps(&report),
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["gap_report"][0]["coverage"], "Partial");
        assert_eq!(value["gap_report"][0]["clause_id"], "A.8.24");
        assert_eq!(value["gaps"].as_array().unwrap().len(), 1);
        assert_eq!(value["summary"]["risk"], "High");
        assert_eq!(value["config"]["vectorizer"], "pairwise");
    }
}
