//! Sentence-level segmentation of a policy document.
//!
//! A document is split on sentence-terminal punctuation (`.`, `!`, `?`)
//! followed by whitespace. Each raw span keeps its position in that split as
//! its id; short spans (headers, bullet markers, fragments) are dropped
//! without renumbering the survivors.

use serde::Serialize;

use crate::normalize::normalize;

/// Default minimum raw span length, in characters.
pub const MIN_SEGMENT_LENGTH: usize = 25;

/// One scoreable unit of a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Position of the span in the original split. Gaps are expected.
    pub id: usize,
    /// Original-case excerpt.
    pub text: String,
    /// Canonical form used for scoring.
    pub normalized: String,
}

/// Segment a document with the default minimum length.
pub fn segment(document_text: &str) -> Vec<Segment> {
    segment_with_min_length(document_text, MIN_SEGMENT_LENGTH)
}

/// Segment a document, keeping only spans with at least `min_length` characters.
///
/// Length is measured on the raw span before normalisation.
pub fn segment_with_min_length(document_text: &str, min_length: usize) -> Vec<Segment> {
    if document_text.trim().is_empty() {
        return Vec::new();
    }

    split_sentences(document_text)
        .into_iter()
        .enumerate()
        .filter(|(_, span)| span.chars().count() >= min_length)
        .map(|(id, span)| Segment {
            id,
            text: span.to_string(),
            normalized: normalize(span),
        })
        .collect()
}

/// Split on `[.!?]` followed by one or more whitespace characters.
///
/// The terminator and the whitespace run are consumed. Text with no such
/// boundary comes back as a single span.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if !chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
            continue;
        }

        spans.push(&text[start..i]);

        // Swallow the whole whitespace run.
        start = text.len();
        while let Some(&(j, next)) = chars.peek() {
            if next.is_whitespace() {
                chars.next();
            } else {
                start = j;
                break;
            }
        }
    }

    spans.push(&text[start..]);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let spans = split_sentences("One. Two! Three? Four");
        assert_eq!(spans, vec!["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn punctuation_without_whitespace_does_not_split() {
        let spans = split_sentences("Use TLS 1.2 or later.Always.");
        assert_eq!(spans, vec!["Use TLS 1.2 or later.Always."]);
    }

    #[test]
    fn consumes_whitespace_runs() {
        let spans = split_sentences("First sentence.\n\n   Second sentence.");
        assert_eq!(spans, vec!["First sentence", "Second sentence."]);
    }

    #[test]
    fn trailing_boundary_leaves_empty_span() {
        let spans = split_sentences("Only sentence. ");
        assert_eq!(spans, vec!["Only sentence", ""]);
    }

    #[test]
    fn consecutive_terminators_yield_empty_span() {
        let spans = split_sentences("a. . b");
        assert_eq!(spans, vec!["a", "", "b"]);
    }

    #[test]
    fn ids_keep_original_positions() {
        let doc = "1. Scope. All company data at rest must be encrypted. \
                   Note. Access to production systems requires multi-factor authentication.";
        let segs = segment(doc);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].id, 2);
        assert_eq!(segs[0].text, "All company data at rest must be encrypted");
        assert_eq!(segs[0].normalized, "all company data at rest must be encrypted");
        assert_eq!(segs[1].id, 4);
    }

    #[test]
    fn no_terminal_punctuation_is_single_span() {
        let doc = "Passwords must be rotated every ninety days";
        let segs = segment(doc);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].id, 0);
        assert_eq!(segs[0].text, doc);
    }

    #[test]
    fn short_single_span_is_dropped() {
        assert!(segment("Too short").is_empty());
    }

    #[test]
    fn empty_and_whitespace_documents() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t  ").is_empty());
        assert!(segment(&" ".repeat(100)).is_empty());
    }

    #[test]
    fn custom_min_length() {
        let doc = "Short one. Another short one.";
        assert!(segment(doc).is_empty());
        let segs = segment_with_min_length(doc, 5);
        assert_eq!(segs.len(), 2);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 24 characters, but more than 25 bytes.
        let doc = format!("{}.", "é".repeat(23));
        assert_eq!(doc.chars().count(), 24);
        assert!(segment(&doc).is_empty());
    }

    proptest! {
        /// Every retained segment meets the minimum raw length.
        #[test]
        fn retained_segments_meet_min_length(doc in "[a-zA-Z .!?\n]{0,300}", min in 1usize..40) {
            for seg in segment_with_min_length(&doc, min) {
                prop_assert!(seg.text.chars().count() >= min);
            }
        }

        /// Ids are strictly increasing.
        #[test]
        fn ids_strictly_increase(doc in "[a-z .!?]{0,300}") {
            let segs = segment_with_min_length(&doc, 3);
            for pair in segs.windows(2) {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }

        /// Fragments shorter than the minimum never produce segments.
        #[test]
        fn fragments_only_document_is_empty(words in prop::collection::vec("[a-z]{1,10}", 0..20)) {
            let doc = words.join(". ");
            prop_assert!(segment_with_min_length(&doc, 25).is_empty());
        }
    }
}
