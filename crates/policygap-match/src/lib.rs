//! Gap-classification engine: scores every catalogue clause against every
//! policy segment and reduces each clause to its best-matching segment.
//!
//! Evidence comes from two sources, whole-word keyword hits and TF-IDF
//! cosine similarity between the clause requirement and the segment.
//! Enable the `parallel` feature to score clauses on the rayon pool.

pub mod analysis;
pub mod keywords;
pub mod matcher;
pub mod stopwords;
pub mod summary;
pub mod tfidf;

pub use analysis::{Analysis, AnalysisError, analyze};
pub use keywords::keyword_score;
pub use matcher::{Matcher, build_report, classify, classify_with, score, similarity_score};
pub use summary::{ComplianceSummary, RiskLevel, gaps, summarize};
pub use tfidf::{TermVector, TfidfModel, pair_similarity};
