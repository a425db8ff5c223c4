//! Live filtering of the driver roster.
//!
//! This crate provides:
//! - FilterCriteria and its normalization
//! - Filter trait and the substring filter behind each criterion
//! - FilterPipeline and `apply_filter`, the pure visibility/rank pass
//! - RosterView, the contract a display surface implements to be refreshed
//!
//! ## Architecture
//! Each input change runs one pass:
//! 1. The view hands over its records and current filter strings
//! 2. `apply_filter` decides visibility and assigns ranks 1..=n to visible rows
//! 3. The view shows/hides rows, writes rank labels and the count badge
//!
//! ## Example Usage
//! ```ignore
//! use filter_engine::{apply_filter, FilterCriteria};
//!
//! let criteria = FilterCriteria::new("ham", "", "mercedes");
//! let result = apply_filter(index.records(), &criteria);
//! println!("{}", result.count_label());
//! ```

pub mod traits;
pub mod criteria;
pub mod filters;
pub mod filter_pipeline;
pub mod result;
pub mod view;

// Re-export main types
pub use traits::Filter;
pub use criteria::FilterCriteria;
pub use filter_pipeline::{apply_filter, FilterPipeline};
pub use result::{count_label, FilterResult, RowOutcome};
pub use view::{refresh, render, RosterView};
