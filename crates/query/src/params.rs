//! Structured query translator
//!
//! Maps explicit request parameters one-to-one onto predicate fields.
//! No inference: an absent input means an absent constraint. Validation
//! happens here, before any predicate exists, so the store is never
//! consulted for a malformed query.

use strand_core::{Error, Predicate, Result};

/// Raw structured filter parameters, as a boundary would receive them
///
/// Numeric fields arrive signed so that out-of-range values can be
/// rejected with `InvalidInput` instead of failing shape validation at
/// the transport layer.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct QueryParams {
    /// Palindrome-flag constraint
    pub is_palindrome: Option<bool>,
    /// Inclusive minimum length; must be non-negative
    pub min_length: Option<i64>,
    /// Inclusive maximum length; must be non-negative
    pub max_length: Option<i64>,
    /// Exact word count; must be non-negative
    pub word_count: Option<i64>,
    /// Required character; must be exactly one character
    pub contains_character: Option<String>,
}

impl QueryParams {
    /// Validate and translate into a `Predicate`
    ///
    /// Rejects negative numeric bounds and a `contains_character` that is
    /// not exactly one character (counted in code points).
    pub fn into_predicate(self) -> Result<Predicate> {
        Ok(Predicate {
            is_palindrome: self.is_palindrome,
            min_length: non_negative("min_length", self.min_length)?,
            max_length: non_negative("max_length", self.max_length)?,
            word_count: non_negative("word_count", self.word_count)?,
            contains_character: self
                .contains_character
                .map(|s| single_char(&s))
                .transpose()?,
        })
    }
}

fn non_negative(field: &str, value: Option<i64>) -> Result<Option<usize>> {
    match value {
        None => Ok(None),
        Some(n) if n >= 0 => Ok(Some(n as usize)),
        Some(n) => Err(Error::InvalidInput(format!(
            "{field} must be non-negative, got {n}"
        ))),
    }
}

fn single_char(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(Error::InvalidInput(format!(
            "contains_character must be exactly one character, got {s:?}"
        ))),
    }
}
