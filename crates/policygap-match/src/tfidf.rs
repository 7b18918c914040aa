//! TF-IDF term weighting and cosine similarity.
//!
//! A [`TfidfModel`] is fitted over a small corpus of normalised texts and
//! projects any text into the resulting vector space. The engine fits either
//! one model per (requirement, segment) pair or a single model per run.
//!
//! # Weighting
//!
//! - Terms: words of two or more characters, minus [`ENGLISH_STOP_WORDS`]
//! - TF: raw count in the text
//! - IDF: `ln((1 + n) / (1 + df)) + 1` (smoothed, never zero)
//! - Vectors are L2-normalised, so cosine is a dot product
//!
//! [`ENGLISH_STOP_WORDS`]: crate::stopwords::ENGLISH_STOP_WORDS

use std::collections::HashMap;

use policygap_core::normalize::words;

use crate::stopwords::is_stop_word;

/// Sparse L2-normalised vector: `(term index, weight)` sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector(Vec<(usize, f64)>);

impl TermVector {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cosine similarity with another vector of the same model.
    ///
    /// Zero when either side has no terms.
    pub fn cosine(&self, other: &TermVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.0.len() && j < other.0.len() {
            let (a_idx, a_w) = self.0[i];
            let (b_idx, b_w) = other.0[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot.clamp(0.0, 1.0)
    }
}

/// Vocabulary and IDF weights fitted over a corpus.
#[derive(Debug, Clone, Default)]
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Fit a model over normalised documents.
    pub fn fit<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        let mut n_docs = 0usize;

        for doc in documents {
            n_docs += 1;
            let mut seen: Vec<usize> = terms(doc)
                .map(|term| {
                    let next = vocabulary.len();
                    let idx = *vocabulary.entry(term.to_string()).or_insert(next);
                    if idx == doc_freq.len() {
                        doc_freq.push(0);
                    }
                    idx
                })
                .collect();
            seen.sort_unstable();
            seen.dedup();
            for idx in seen {
                doc_freq[idx] += 1;
            }
        }

        let n = n_docs as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Number of distinct terms in the vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Project a normalised text into the model's vector space.
    ///
    /// Terms outside the vocabulary are ignored.
    pub fn transform(&self, text: &str) -> TermVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in terms(text) {
            if let Some(&idx) = self.vocabulary.get(term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut weights: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        weights.sort_unstable_by_key(|&(idx, _)| idx);

        let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weights {
                *w /= norm;
            }
        }
        TermVector(weights)
    }
}

/// Cosine similarity of two normalised texts under a model fitted on just that pair.
pub fn pair_similarity(a: &str, b: &str) -> f64 {
    let model = TfidfModel::fit([a, b]);
    if model.vocabulary_len() == 0 {
        return 0.0;
    }
    model.transform(a).cosine(&model.transform(b))
}

/// Scoreable terms of a normalised text.
fn terms(text: &str) -> impl Iterator<Item = &str> {
    words(text).filter(|w| w.len() >= 2 && !is_stop_word(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_one() {
        let s = pair_similarity("encryption keys rotated", "encryption keys rotated");
        assert!((s - 1.0).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn disjoint_texts_score_zero() {
        assert_eq!(pair_similarity("encryption keys", "visitor badges"), 0.0);
    }

    #[test]
    fn empty_or_stopword_only_scores_zero() {
        assert_eq!(pair_similarity("", "data encrypted"), 0.0);
        assert_eq!(pair_similarity("the and of", "it is a"), 0.0);
        assert_eq!(pair_similarity("", ""), 0.0);
    }

    #[test]
    fn single_characters_are_not_terms() {
        assert_eq!(pair_similarity("a b c x", "x y z"), 0.0);
    }

    #[test]
    fn pair_weights_match_smoothed_idf() {
        // Shared term "data" has idf 1; "encrypted" and "backups" have idf ln(1.5) + 1.
        let a = "data encrypted";
        let b = "data backups";
        let rare = (1.5f64).ln() + 1.0;
        let expected = 1.0 / (1.0 + rare * rare);
        let s = pair_similarity(a, b);
        assert!((s - expected).abs() < 1e-9, "expected {expected}, got {s}");
    }

    #[test]
    fn term_frequency_counts_repeats() {
        let model = TfidfModel::fit(["audit audit logs", "logs"]);
        let v = model.transform("audit audit logs");
        assert_eq!(v.0.len(), 2);
        let norm: f64 = v.0.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn corpus_model_ignores_unknown_terms() {
        let model = TfidfModel::fit(["password rotation", "badge access"]);
        assert_eq!(model.vocabulary_len(), 4);
        assert!(model.transform("firewall").is_empty());
    }

    #[test]
    fn similarity_within_unit_range() {
        let pairs = [
            ("data must be encrypted at rest", "all data at rest is encrypted using aes256"),
            ("access reviews quarterly", "quarterly access reviews access"),
        ];
        for (a, b) in pairs {
            let s = pair_similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "{a:?} vs {b:?} gave {s}");
        }
    }
}
