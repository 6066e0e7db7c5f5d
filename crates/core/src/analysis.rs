//! String analysis
//!
//! `analyze` derives the full property set for a value. It is total and
//! deterministic: any input, including the empty string, is valid and
//! always produces the same result.
//!
//! "Character" throughout means Unicode scalar value (code point).
//! Grapheme clusters are out of scope: an accented letter built from
//! combining marks counts as multiple characters.

use crate::types::ContentHash;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Derived, immutable analysis results for a string value
///
/// Invariants:
/// - `length >= unique_characters`
/// - the frequency counts sum to `length`
/// - `sha256_hash` equals the record id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySet {
    /// Character (code-point) count, not byte count
    pub length: usize,
    /// Case-insensitive palindrome check, no whitespace stripping
    pub is_palindrome: bool,
    /// Number of distinct characters
    pub unique_characters: usize,
    /// Whitespace-delimited non-empty tokens
    pub word_count: usize,
    /// Lowercase hex SHA-256 of the UTF-8 bytes
    pub sha256_hash: String,
    /// Exact code-point multiset, case-sensitive
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// Analyze a string value into its derived property set
///
/// # Example
///
/// ```
/// use strand_core::analysis::analyze;
///
/// let props = analyze("level");
/// assert_eq!(props.length, 5);
/// assert!(props.is_palindrome);
/// assert_eq!(props.word_count, 1);
/// assert_eq!(props.character_frequency_map[&'l'], 2);
/// ```
pub fn analyze(value: &str) -> PropertySet {
    let mut length = 0usize;
    let mut character_frequency_map = BTreeMap::new();
    for ch in value.chars() {
        length += 1;
        *character_frequency_map.entry(ch).or_insert(0) += 1;
    }

    PropertySet {
        length,
        is_palindrome: is_palindrome(value),
        unique_characters: character_frequency_map.len(),
        word_count: value.split_whitespace().count(),
        sha256_hash: ContentHash::of(value).as_str().to_string(),
        character_frequency_map,
    }
}

/// Case-insensitive palindrome check
///
/// Lowercases with the locale-independent Unicode mapping and compares
/// against the reversed sequence. Whitespace and punctuation are kept:
/// "level" is a palindrome, "a man a plan" is not.
fn is_palindrome(value: &str) -> bool {
    let folded: Vec<char> = value.to_lowercase().chars().collect();
    folded.iter().eq(folded.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_analyze_level() {
        let props = analyze("level");
        assert_eq!(props.length, 5);
        assert!(props.is_palindrome);
        assert_eq!(props.unique_characters, 3); // l, e, v
        assert_eq!(props.word_count, 1);
        assert_eq!(props.sha256_hash, ContentHash::of("level").as_str());
        assert_eq!(props.character_frequency_map[&'l'], 2);
        assert_eq!(props.character_frequency_map[&'e'], 2);
        assert_eq!(props.character_frequency_map[&'v'], 1);
    }

    #[test]
    fn test_analyze_empty() {
        let props = analyze("");
        assert_eq!(props.length, 0);
        assert!(props.is_palindrome); // empty reads the same both ways
        assert_eq!(props.unique_characters, 0);
        assert_eq!(props.word_count, 0);
        assert!(props.character_frequency_map.is_empty());
    }

    #[test]
    fn test_analyze_whitespace_only() {
        let props = analyze("   \t  ");
        assert_eq!(props.word_count, 0);
        assert!(props.length > 0);
    }

    #[test]
    fn test_palindrome_case_insensitive() {
        assert!(analyze("Level").is_palindrome);
        assert!(analyze("RaceCar").is_palindrome);
    }

    #[test]
    fn test_palindrome_no_normalization() {
        // Whitespace is not stripped, so this is not a palindrome
        assert!(!analyze("a man a plan").is_palindrome);
        // But spaces in symmetric positions still count
        assert!(analyze("a b a").is_palindrome);
    }

    #[test]
    fn test_word_count_splits_on_runs() {
        assert_eq!(analyze("hello   world").word_count, 2);
        assert_eq!(analyze("  leading and trailing  ").word_count, 3);
        assert_eq!(analyze("one\ttwo\nthree").word_count, 3);
    }

    #[test]
    fn test_frequency_map_case_sensitive() {
        let props = analyze("Zz");
        assert_eq!(props.character_frequency_map[&'Z'], 1);
        assert_eq!(props.character_frequency_map[&'z'], 1);
        assert_eq!(props.unique_characters, 2);
    }

    #[test]
    fn test_length_counts_code_points() {
        // 5 code points, 6 UTF-8 bytes
        assert_eq!(analyze("héllo").length, 5);
        // 3 code points, 9 UTF-8 bytes
        assert_eq!(analyze("日本語").length, 3);
    }

    proptest! {
        #[test]
        fn prop_analyze_deterministic(value in ".*") {
            prop_assert_eq!(analyze(&value), analyze(&value));
        }

        #[test]
        fn prop_frequency_sums_to_length(value in ".*") {
            let props = analyze(&value);
            let total: usize = props.character_frequency_map.values().sum();
            prop_assert_eq!(total, props.length);
            prop_assert!(props.unique_characters <= props.length);
            prop_assert_eq!(props.unique_characters, props.character_frequency_map.len());
        }

        #[test]
        fn prop_hash_matches_content_hash(value in ".*") {
            let props = analyze(&value);
            let hash = ContentHash::of(&value);
            prop_assert_eq!(props.sha256_hash, hash.as_str());
        }
    }
}
