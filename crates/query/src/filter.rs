//! Query evaluator
//!
//! One place applies predicates to record sequences; both the structured
//! path and the natural-language path feed their `Predicate` through
//! here, with no duplicated matching logic.

use strand_core::{Predicate, StringRecord};

/// Filter records by a predicate, preserving relative order
///
/// The input order (the store's enumeration order) is the output order;
/// exactly the matching records are kept.
pub fn filter(predicate: &Predicate, records: Vec<StringRecord>) -> Vec<StringRecord> {
    records
        .into_iter()
        .filter(|record| predicate.matches(&record.properties))
        .collect()
}
