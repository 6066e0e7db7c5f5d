//! Predicate model
//!
//! A `Predicate` is a flat conjunction of optional per-field constraints
//! against a record's derived properties. It carries no disjunction,
//! negation, or nesting, and an empty predicate matches every record.
//!
//! `Predicate::matches` is the single source of truth for matching: both
//! the structured query path and the natural-language path build a
//! `Predicate` and route through it.

use crate::analysis::PropertySet;
use serde::{Deserialize, Serialize};

/// Flat conjunction of optional property constraints
///
/// Absent fields impose no restriction. Field order is irrelevant to
/// evaluation; a record matches when every present constraint holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    /// Exact palindrome-flag equality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on character count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Inclusive upper bound on character count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Exact word-count equality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    /// Required character, matched case-sensitively
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl Predicate {
    /// Predicate with no constraints; matches every record
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether no constraint is set
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Evaluate this predicate against a property set
    ///
    /// Conjunction of the present constraints:
    /// - `is_palindrome`: exact equality
    /// - `min_length` / `max_length`: inclusive bounds on `length`
    /// - `word_count`: exact equality
    /// - `contains_character`: key present in the frequency map
    ///   (case-sensitive, so 'Z' and 'z' are distinct)
    pub fn matches(&self, props: &PropertySet) -> bool {
        if let Some(flag) = self.is_palindrome {
            if props.is_palindrome != flag {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(ch) = self.contains_character {
            if !props.character_frequency_map.contains_key(&ch) {
                return false;
            }
        }
        true
    }
}
