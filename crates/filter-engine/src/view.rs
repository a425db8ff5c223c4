//! Contract between the filter engine and whatever displays the roster.
//!
//! The view owns the rows and the current filter inputs. `refresh` pulls both
//! out, runs the pure `apply_filter`, and pushes the outcome back, so the
//! engine itself never touches a display surface.

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::apply_filter;
use crate::result::FilterResult;
use roster_data::RosterRecord;

/// A display surface holding one row per roster record.
///
/// Row indices are positions in `records()`. A view with no element for a
/// given row or for the badge should ignore that update rather than fail.
pub trait RosterView {
    /// Records backing the rows, in display order
    fn records(&self) -> &[RosterRecord];

    /// Current values of the query, nationality and team inputs
    fn criteria(&self) -> FilterCriteria;

    /// Show or hide row `row`
    fn set_row_visible(&mut self, row: usize, visible: bool);

    /// Write `rank` into the index label of visible row `row`
    fn set_row_rank(&mut self, row: usize, rank: usize);

    /// Replace the results badge text
    fn set_count_label(&mut self, label: &str);
}

/// Recompute visibility for the whole view and apply it.
///
/// Returns the result so callers can inspect what was rendered.
pub fn refresh<V: RosterView + ?Sized>(view: &mut V) -> FilterResult {
    let criteria = view.criteria();
    let result = apply_filter(view.records(), &criteria);
    render(view, &result);
    result
}

/// Push an already computed result onto a view
pub fn render<V: RosterView + ?Sized>(view: &mut V, result: &FilterResult) {
    for (row, outcome) in result.rows.iter().enumerate() {
        view.set_row_visible(row, outcome.visible);
        if let Some(rank) = outcome.rank {
            view.set_row_rank(row, rank);
        }
    }
    view.set_count_label(&result.count_label());
}
