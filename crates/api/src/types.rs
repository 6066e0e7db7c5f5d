//! Response envelopes for the boundary operations
//!
//! Serializable value types so any transport (HTTP handler, CLI, test
//! harness) can render them without reaching into the core.

use serde::Serialize;
use strand_core::{Predicate, StringRecord};

/// Result of a structured list query
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    /// Matching records in enumeration order
    pub records: Vec<StringRecord>,
    /// Number of matching records
    pub count: usize,
    /// The predicate the filters translated into
    pub filters_applied: Predicate,
}

/// How a natural-language phrase was understood
#[derive(Debug, Clone, Serialize)]
pub struct InterpretedQuery {
    /// The phrase as received
    pub original: String,
    /// The predicate the phrase resolved to
    pub predicate: Predicate,
}

/// Result of a natural-language list query
#[derive(Debug, Clone, Serialize)]
pub struct PhraseResponse {
    /// Matching records in enumeration order
    pub records: Vec<StringRecord>,
    /// Number of matching records
    pub count: usize,
    /// Echo of the interpreted phrase
    pub interpreted: InterpretedQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_serializes_predicate() {
        let resp = ListResponse {
            records: Vec::new(),
            count: 0,
            filters_applied: Predicate {
                is_palindrome: Some(true),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["count"], 0);
        assert_eq!(json["filters_applied"]["is_palindrome"], true);
    }

    #[test]
    fn test_phrase_response_echoes_original() {
        let resp = PhraseResponse {
            records: Vec::new(),
            count: 0,
            interpreted: InterpretedQuery {
                original: "palindromic strings".to_string(),
                predicate: Predicate {
                    is_palindrome: Some(true),
                    ..Default::default()
                },
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["interpreted"]["original"], "palindromic strings");
    }
}
