//! Query engine for strand
//!
//! Two translators produce the shared `Predicate`:
//! - `QueryParams::into_predicate` for explicit structured parameters
//! - `translate` for a small set of natural-language phrasings
//!
//! `filter` is the single evaluator both paths route through.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod params;
pub mod phrase;

pub use filter::filter;
pub use params::QueryParams;
pub use phrase::translate;
