//! Boundary API for strand
//!
//! The `Strand` facade exposes the five operations a front-end consumes:
//! create, get, delete, structured list, and natural-language list, with
//! identifier resolution and serializable response envelopes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod facade;
pub mod types;

pub use facade::Strand;
pub use types::{InterpretedQuery, ListResponse, PhraseResponse};
