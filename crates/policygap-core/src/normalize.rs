//! Text normalisation shared by segments, requirements, and keywords.
//!
//! Every string that takes part in scoring passes through [`normalize`] so
//! that literal keyword matching and term weighting compare like with like.
//!
//! # Canonical form
//!
//! - Lower-case only
//! - ASCII letters `a-z` and digits `0-9` survive; everything else is a separator
//! - Words separated by exactly one space, no leading or trailing space

/// Normalise text into its canonical comparable form.
///
/// Input: "Access-Control Policy (v2.1)!"
/// Output: "access control policy v2 1"
///
/// # Algorithm
///
/// 1. Lower-case the whole string
/// 2. Replace every character that is not `a-z`, `0-9`, or whitespace with a space
/// 3. Collapse whitespace runs into a single space
/// 4. Trim both ends
///
/// Total and idempotent: the output contains only characters that step 2
/// keeps, separated by single spaces, so a second pass changes nothing.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            // Punctuation, symbols, non-ASCII letters, and whitespace all separate words.
            pending_space = true;
        }
    }

    out
}

/// Iterate over the words of an already-normalised string.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Access-Control Policy (v2.1)!"),
            "access control policy v2 1"
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  data \t\n at   rest  "), "data at rest");
    }

    #[test]
    fn empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("--- *** ---"), "");
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(normalize("café policy"), "caf policy");
        assert_eq!(normalize("naïve"), "na ve");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(normalize("AES-256 / TLS1.3"), "aes 256 tls1 3");
    }

    #[test]
    fn words_splits_normalized_text() {
        let w: Vec<&str> = words("all data at rest").collect();
        assert_eq!(w, vec!["all", "data", "at", "rest"]);
        assert_eq!(words("").count(), 0);
    }

    proptest! {
        /// normalize(normalize(s)) == normalize(s)
        #[test]
        fn normalize_is_idempotent(s in any::<String>()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Output alphabet is exactly [a-z0-9 ] with no doubled or edge spaces.
        #[test]
        fn normalize_output_is_canonical(s in "\\PC*") {
            let n = normalize(&s);
            prop_assert!(n.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
            prop_assert!(!n.starts_with(' ') && !n.ends_with(' '));
            prop_assert!(!n.contains("  "));
        }
    }
}
