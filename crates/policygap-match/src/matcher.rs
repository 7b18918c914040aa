//! Score fusion, coverage classification, and best-match reduction.
//!
//! Every clause is scored against every segment. The fused score privileges
//! literal keyword evidence: once half the keywords are present the pair
//! scores a fixed value and similarity is never computed. Otherwise keyword
//! and similarity evidence are blended. Each clause keeps its single best
//! segment, the first one to reach the maximum.

use policygap_core::{
    AnalysisConfig, Clause, Coverage, CoverageThresholds, FusionPolicy, GapReportEntry, Segment,
    VectorizerMode, round_score,
};
use tracing::{debug, info};

use crate::keywords::keyword_score;
use crate::tfidf::{TermVector, TfidfModel, pair_similarity};

/// Similarity between a normalised requirement and a normalised segment.
///
/// Fits a TF-IDF model on exactly these two texts.
pub fn similarity_score(requirement_text: &str, segment_text: &str) -> f64 {
    pair_similarity(requirement_text, segment_text)
}

/// Fused score of a clause against one normalised segment, default policy.
pub fn score(clause: &Clause, segment_text: &str) -> f64 {
    fuse(
        keyword_score(clause, segment_text),
        &FusionPolicy::default(),
        || similarity_score(&clause.normalized_requirement, segment_text),
    )
}

/// Classify a fused score with the default thresholds.
pub fn classify(score: f64) -> Coverage {
    classify_with(score, &CoverageThresholds::default())
}

/// Classify a fused score. Each band is closed at its lower bound.
pub fn classify_with(score: f64, thresholds: &CoverageThresholds) -> Coverage {
    if score >= thresholds.covered {
        Coverage::Covered
    } else if score >= thresholds.partial {
        Coverage::Partial
    } else {
        Coverage::Missing
    }
}

/// Build a gap report with the default configuration.
pub fn build_report(clauses: &[Clause], segments: &[Segment]) -> Vec<GapReportEntry> {
    Matcher::new(AnalysisConfig::default()).build_report(clauses, segments)
}

/// Combine keyword and similarity evidence.
///
/// `similarity` is only evaluated when the keyword shortcut does not fire.
fn fuse(keyword: f64, policy: &FusionPolicy, similarity: impl FnOnce() -> f64) -> f64 {
    if keyword >= policy.keyword_shortcut {
        return policy.shortcut_score;
    }
    policy.keyword_weight * keyword + policy.similarity_weight * similarity()
}

/// Clause-to-segment matcher for one configuration.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: AnalysisConfig,
}

impl Matcher {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Fused score of one clause/segment pair under this matcher's fusion
    /// policy.
    ///
    /// Similarity is always fitted on the pair alone, whatever the configured
    /// vectorizer: a corpus space only exists for a whole run, so use
    /// [`Matcher::build_report`] to score with [`VectorizerMode::Corpus`].
    pub fn pairwise_score(&self, clause: &Clause, segment_text: &str) -> f64 {
        fuse(keyword_score(clause, segment_text), &self.config.fusion, || {
            similarity_score(&clause.normalized_requirement, segment_text)
        })
    }

    /// One entry per clause, in clause order.
    pub fn build_report(&self, clauses: &[Clause], segments: &[Segment]) -> Vec<GapReportEntry> {
        let space = SimilaritySpace::build(self.config.vectorizer, clauses, segments);
        info!(
            clauses = clauses.len(),
            segments = segments.len(),
            vectorizer = %self.config.vectorizer,
            "scoring clauses"
        );

        #[cfg(feature = "parallel")]
        let report: Vec<GapReportEntry> = {
            use rayon::prelude::*;
            clauses
                .par_iter()
                .map(|clause| self.best_match(clause, segments, &space))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let report: Vec<GapReportEntry> = clauses
            .iter()
            .map(|clause| self.best_match(clause, segments, &space))
            .collect();

        report
    }

    /// Reduce one clause over all segments in segment order.
    ///
    /// Only a strictly higher score replaces the current best, so ties go to
    /// the earliest segment and a clause whose scores are all zero keeps no
    /// match.
    fn best_match(
        &self,
        clause: &Clause,
        segments: &[Segment],
        space: &SimilaritySpace,
    ) -> GapReportEntry {
        let requirement = space.requirement_vector(clause);

        let mut best_score = 0.0;
        let mut best: Option<&Segment> = None;

        for (pos, segment) in segments.iter().enumerate() {
            let kw = keyword_score(clause, &segment.normalized);
            let s = fuse(kw, &self.config.fusion, || match (&requirement, space) {
                (Some(req), SimilaritySpace::Corpus { segment_vectors, .. }) => {
                    req.cosine(&segment_vectors[pos])
                }
                _ => similarity_score(&clause.normalized_requirement, &segment.normalized),
            });
            if s > best_score {
                best_score = s;
                best = Some(segment);
            }
        }

        debug!(
            clause = %clause.display_id(),
            score = best_score,
            segment = ?best.map(|s| s.id),
            "best match"
        );

        GapReportEntry {
            clause_id: clause.clause_id.clone(),
            title: clause.title.clone(),
            coverage: classify_with(best_score, &self.config.thresholds),
            score: round_score(best_score),
            matched_text: best.map(|s| s.text.clone()).unwrap_or_default(),
            segment_id: best.map(|s| s.id),
        }
    }
}

/// Vector space used for similarity during one run.
enum SimilaritySpace {
    Pairwise,
    /// One model fitted over every segment and requirement, with segment
    /// vectors projected once up front.
    Corpus {
        model: TfidfModel,
        segment_vectors: Vec<TermVector>,
    },
}

impl SimilaritySpace {
    fn build(mode: VectorizerMode, clauses: &[Clause], segments: &[Segment]) -> Self {
        match mode {
            VectorizerMode::Pairwise => Self::Pairwise,
            VectorizerMode::Corpus => {
                let model = TfidfModel::fit(
                    segments
                        .iter()
                        .map(|s| s.normalized.as_str())
                        .chain(clauses.iter().map(|c| c.normalized_requirement.as_str())),
                );
                debug!(terms = model.vocabulary_len(), "fitted corpus vectorizer");
                let segment_vectors = segments
                    .iter()
                    .map(|s| model.transform(&s.normalized))
                    .collect();
                Self::Corpus {
                    model,
                    segment_vectors,
                }
            }
        }
    }

    fn requirement_vector(&self, clause: &Clause) -> Option<TermVector> {
        match self {
            Self::Pairwise => None,
            Self::Corpus { model, .. } => Some(model.transform(&clause.normalized_requirement)),
        }
    }
}
