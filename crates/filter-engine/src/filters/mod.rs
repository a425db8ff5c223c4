//! Filter implementations for the roster pipeline.
//!
//! Every criterion is a substring check on one record field, so a single
//! filter type parameterized by `RecordField` covers query, nationality and
//! team.

pub mod substring;

// Re-export for convenience
pub use substring::{RecordField, SubstringFilter};
