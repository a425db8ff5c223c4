//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets each active criterion be
//! expressed as an independent predicate over a roster record.

use roster_data::RosterRecord;

/// A single predicate over roster records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// A record is visible only when every filter in the pipeline keeps it.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `record` passes this filter
    fn matches(&self, record: &RosterRecord) -> bool;
}
