//! The FilterPipeline evaluates roster records against every active filter.
//!
//! This module provides the FilterPipeline struct, built either by hand with
//! the builder pattern or from `FilterCriteria`, and `apply_filter`, the
//! single pure entry point the view calls on every input change.

use crate::criteria::FilterCriteria;
use crate::filters::{RecordField, SubstringFilter};
use crate::result::{FilterResult, RowOutcome};
use crate::traits::Filter;
use roster_data::RosterRecord;

/// Decide visibility and rank for every record.
///
/// ## Algorithm
/// 1. Normalize the criteria (trim, lowercase)
/// 2. For each record in order, it is visible iff every constrained field
///    contains its criterion as a substring
/// 3. A running counter gives each visible record its 1-based rank
/// 4. The final counter value is the visible count
///
/// Never reorders or mutates the records and never fails.
pub fn apply_filter(records: &[RosterRecord], criteria: &FilterCriteria) -> FilterResult {
    if criteria.is_unconstrained() {
        tracing::debug!("No active criteria, every row stays visible");
    }
    FilterPipeline::from_criteria(criteria).evaluate(records)
}

/// Conjunction of filters applied to a record list.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SubstringFilter::new(RecordField::Name, "ham"))
///     .add_filter(SubstringFilter::new(RecordField::Team, "mercedes"));
///
/// let result = pipeline.evaluate(index.records());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline (keeps every record).
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// One substring filter per constrained criterion; empty criteria add
    /// nothing.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let criteria = criteria.normalized();
        [
            (RecordField::Name, criteria.query),
            (RecordField::Nationality, criteria.nationality),
            (RecordField::Team, criteria.team),
        ]
        .into_iter()
        .filter(|(_, needle)| !needle.is_empty())
        .fold(Self::new(), |pipeline, (field, needle)| {
            pipeline.add_filter(SubstringFilter::new(field, needle))
        })
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether a single record passes every filter
    pub fn matches(&self, record: &RosterRecord) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }

    /// Run every record through the pipeline, assigning ranks in input order.
    pub fn evaluate(&self, records: &[RosterRecord]) -> FilterResult {
        for filter in &self.filters {
            tracing::debug!("Active filter: {}", filter.name());
        }

        let mut visible_count = 0;
        let rows = records
            .iter()
            .map(|record| {
                if self.matches(record) {
                    visible_count += 1;
                    RowOutcome::shown(visible_count)
                } else {
                    RowOutcome::hidden()
                }
            })
            .collect();

        tracing::debug!(
            "Filter pass complete (input count: {}, visible: {})",
            records.len(),
            visible_count
        );

        FilterResult {
            rows,
            visible_count,
        }
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RosterRecord> {
        vec![
            RosterRecord::new("Lewis Hamilton", "British", "Mercedes"),
            RosterRecord::new("Max Verstappen", "Dutch", "Red Bull"),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let result = pipeline.evaluate(&records());
        assert_eq!(result.visible_count, 2);
        assert_eq!(result.rows, vec![RowOutcome::shown(1), RowOutcome::shown(2)]);
    }

    #[test]
    fn test_single_filter() {
        let pipeline =
            FilterPipeline::new().add_filter(SubstringFilter::new(RecordField::Name, "ham"));

        let result = pipeline.evaluate(&records());
        assert_eq!(result.visible_count, 1);
        assert_eq!(result.rows, vec![RowOutcome::shown(1), RowOutcome::hidden()]);
        assert_eq!(result.count_label(), "1 result");
    }

    #[test]
    fn test_from_criteria_skips_empty_fields() {
        assert!(FilterPipeline::from_criteria(&FilterCriteria::default()).is_empty());
        assert!(FilterPipeline::from_criteria(&FilterCriteria::new(" ", "", "\t")).is_empty());
        assert_eq!(
            FilterPipeline::from_criteria(&FilterCriteria::new("max", "", "RED")).len(),
            2
        );
    }

    #[test]
    fn test_unconstrained_criteria_build_no_filters() {
        for criteria in [
            FilterCriteria::default(),
            FilterCriteria::new("  ", "\t", "\n"),
            FilterCriteria::query("ham"),
        ] {
            assert_eq!(
                criteria.is_unconstrained(),
                FilterPipeline::from_criteria(&criteria).is_empty()
            );
        }
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let criteria = FilterCriteria::new("max", "british", "");
        let result = apply_filter(&records(), &criteria);
        assert_eq!(result.visible_count, 0);
        assert!(result.rows.iter().all(|row| !row.visible && row.rank.is_none()));
    }

    #[test]
    fn test_empty_records() {
        let result = apply_filter(&[], &FilterCriteria::query("anything"));
        assert_eq!(result.visible_count, 0);
        assert!(result.rows.is_empty());
        assert_eq!(result.count_label(), "0 results");
    }
}
