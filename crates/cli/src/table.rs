//! Terminal rendition of the roster table.

use colored::Colorize;
use filter_engine::{FilterCriteria, RosterView};
use roster_data::{RosterIndex, RosterRecord};

/// Display state of one table row
#[derive(Debug, Clone, PartialEq, Eq)]
struct RowState {
    visible: bool,
    rank_label: String,
}

/// The roster as a terminal table: one row per driver, a rank column for
/// visible rows and a results badge underneath.
pub struct TableView<'a> {
    index: &'a RosterIndex,
    criteria: FilterCriteria,
    rows: Vec<RowState>,
    badge: String,
}

impl<'a> TableView<'a> {
    /// All rows start visible, ranked by position, as on first load
    pub fn new(index: &'a RosterIndex) -> Self {
        let rows = (1..=index.len())
            .map(|rank| RowState {
                visible: true,
                rank_label: rank.to_string(),
            })
            .collect();

        Self {
            index,
            criteria: FilterCriteria::default(),
            rows,
            badge: filter_engine::count_label(index.len()),
        }
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn badge(&self) -> &str {
        &self.badge
    }

    /// Plain-text lines for the visible rows, in roster order
    pub fn visible_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .zip(self.index.drivers())
            .filter(|(row, _)| row.visible)
            .map(|(row, driver)| {
                format!(
                    "{:>4}. {:<28} {:<18} {:<20} wins {:<4} titles {}",
                    row.rank_label,
                    driver.name,
                    driver.nationality,
                    driver.team,
                    driver.wins,
                    driver.titles
                )
            })
            .collect()
    }

    pub fn print(&self) {
        for line in self.visible_lines() {
            println!("{}", line);
        }
        println!("{}", self.badge.bold().cyan());
    }
}

impl RosterView for TableView<'_> {
    fn records(&self) -> &[RosterRecord] {
        self.index.records()
    }

    fn criteria(&self) -> FilterCriteria {
        self.criteria.clone()
    }

    fn set_row_visible(&mut self, row: usize, visible: bool) {
        if let Some(state) = self.rows.get_mut(row) {
            state.visible = visible;
        }
    }

    fn set_row_rank(&mut self, row: usize, rank: usize) {
        if let Some(state) = self.rows.get_mut(row) {
            state.rank_label = rank.to_string();
        }
    }

    fn set_count_label(&mut self, label: &str) {
        self.badge = label.to_string();
    }
}
