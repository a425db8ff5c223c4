//! Output of one filter pass.

use serde::{Deserialize, Serialize};

/// Outcome for one input record, at the same position as the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOutcome {
    pub visible: bool,
    /// 1-based position among visible rows; `None` when hidden
    pub rank: Option<usize>,
}

impl RowOutcome {
    pub fn shown(rank: usize) -> Self {
        Self {
            visible: true,
            rank: Some(rank),
        }
    }

    pub fn hidden() -> Self {
        Self {
            visible: false,
            rank: None,
        }
    }
}

/// Visibility and rank for every record, plus the visible total.
///
/// `rows[i]` describes input record `i`. Ranks of the visible rows, read in
/// order, are exactly `1..=visible_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult {
    pub rows: Vec<RowOutcome>,
    pub visible_count: usize,
}

impl FilterResult {
    /// `(row index, rank)` for each visible row, in input order
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(row, outcome)| outcome.rank.map(|rank| (row, rank)))
    }

    pub fn is_visible(&self, row: usize) -> bool {
        self.rows.get(row).is_some_and(|outcome| outcome.visible)
    }

    pub fn rank(&self, row: usize) -> Option<usize> {
        self.rows.get(row).and_then(|outcome| outcome.rank)
    }

    /// Text for the results badge
    pub fn count_label(&self) -> String {
        count_label(self.visible_count)
    }
}

/// "1 result" for exactly one, "<n> results" otherwise (zero included)
pub fn count_label(count: usize) -> String {
    if count == 1 {
        format!("{} result", count)
    } else {
        format!("{} results", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label_pluralization() {
        assert_eq!(count_label(0), "0 results");
        assert_eq!(count_label(1), "1 result");
        assert_eq!(count_label(2), "2 results");
        assert_eq!(count_label(21), "21 results");
    }

    #[test]
    fn test_accessors() {
        let result = FilterResult {
            rows: vec![RowOutcome::hidden(), RowOutcome::shown(1), RowOutcome::shown(2)],
            visible_count: 2,
        };
        assert!(!result.is_visible(0));
        assert!(result.is_visible(2));
        assert!(!result.is_visible(9));
        assert_eq!(result.rank(1), Some(1));
        assert_eq!(result.rank(0), None);
        assert_eq!(result.visible_rows().collect::<Vec<_>>(), vec![(1, 1), (2, 2)]);
        assert_eq!(result.count_label(), "2 results");
    }
}
