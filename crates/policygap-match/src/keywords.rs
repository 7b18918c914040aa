//! Literal keyword evidence.

use policygap_core::Clause;
use policygap_core::normalize::words;

/// Fraction of the clause's keywords found as whole words in a normalised segment.
///
/// A clause with no keywords scores 0. Multi-word keywords must appear as a
/// contiguous run of words, so `"log"` never matches inside `"login"`.
pub fn keyword_score(clause: &Clause, segment_text: &str) -> f64 {
    let keywords = &clause.normalized_keywords;
    if keywords.is_empty() {
        return 0.0;
    }

    let haystack: Vec<&str> = words(segment_text).collect();
    let matched = keywords
        .iter()
        .filter(|kw| contains_phrase(&haystack, kw))
        .count();

    matched as f64 / keywords.len() as f64
}

/// Whole-word phrase search over a word sequence.
///
/// An empty phrase matches any non-empty sequence.
fn contains_phrase(haystack: &[&str], phrase: &str) -> bool {
    let needle: Vec<&str> = words(phrase).collect();
    if needle.is_empty() {
        return !haystack.is_empty();
    }
    haystack.windows(needle.len()).any(|w| w == needle.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn clause(keywords: &[&str]) -> Clause {
        let record = json!({ "clause_id": "T-1", "keywords": keywords });
        match record {
            serde_json::Value::Object(map) => Clause::from_record(&map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn no_keywords_scores_zero() {
        assert_eq!(keyword_score(&clause(&[]), "anything at all here"), 0.0);
    }

    #[test]
    fn fraction_of_keywords_matched() {
        let c = clause(&["encryption", "backup", "mfa", "logging"]);
        let s = keyword_score(&c, "encryption and mfa are enforced");
        assert_eq!(s, 0.5);
    }

    #[test]
    fn whole_word_only() {
        let c = clause(&["log"]);
        assert_eq!(keyword_score(&c, "users login daily"), 0.0);
        assert_eq!(keyword_score(&c, "every access is written to a log"), 1.0);
    }

    #[test]
    fn multi_word_keywords_match_as_phrase() {
        let c = clause(&["Multi-Factor Authentication"]);
        assert_eq!(keyword_score(&c, "multi factor authentication is required"), 1.0);
        assert_eq!(keyword_score(&c, "authentication uses multi factor tokens"), 0.0);
    }

    #[test]
    fn empty_keyword_matches_any_nonempty_segment() {
        let c = clause(&["!!!", "firewall"]);
        assert_eq!(c.normalized_keywords[0], "");
        assert_eq!(keyword_score(&c, "perimeter controls exist"), 0.5);
        assert_eq!(keyword_score(&c, ""), 0.0);
    }

    proptest! {
        #[test]
        fn score_is_bounded(
            kws in prop::collection::vec("[a-z]{1,6}( [a-z]{1,6})?", 0..6),
            seg in "[a-z ]{0,120}",
        ) {
            let refs: Vec<&str> = kws.iter().map(String::as_str).collect();
            let s = keyword_score(&clause(&refs), &seg);
            prop_assert!((0.0..=1.0).contains(&s));
            if kws.is_empty() {
                prop_assert_eq!(s, 0.0);
            }
        }
    }
}
