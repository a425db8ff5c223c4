//! RosterIndex building and querying.
//!
//! The index owns the enriched drivers in file order, the lower-cased
//! `RosterRecord` projection the filter engine scans, and a name lookup.
//! Order matters everywhere: row `i` of `records()` is driver `i`.

use crate::error::{Result, RosterError};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

/// How many entries the nationality and team breakdowns keep
pub const TOP_BREAKDOWN: usize = 15;

/// In-memory roster: drivers, their search records, and a name index.
#[derive(Debug, Default)]
pub struct RosterIndex {
    drivers: Vec<Driver>,
    records: Vec<RosterRecord>,
    by_name: HashMap<String, usize>,
}

impl RosterIndex {
    /// Load and enrich the roster file.
    ///
    /// Steps:
    /// 1. Parse the JSON array (missing file -> empty roster)
    /// 2. Enrich each driver against `reference_year`
    /// 3. Build search records and the name index
    pub fn load_from_file(path: &Path, reference_year: u16) -> Result<Self> {
        tracing::info!("Loading roster from {}", path.display());

        let drivers = parser::parse_drivers(path)?;
        let index = Self::from_drivers(drivers, reference_year);

        tracing::info!("Roster loaded: {} drivers", index.len());
        Ok(index)
    }

    /// Build an index from already-parsed drivers
    pub fn from_drivers(drivers: Vec<Driver>, reference_year: u16) -> Self {
        // par_iter + collect keeps input order
        let drivers: Vec<Driver> = drivers
            .into_par_iter()
            .map(|driver| parser::enrich(driver, reference_year))
            .collect();
        let records: Vec<RosterRecord> = drivers.par_iter().map(RosterRecord::from).collect();

        let mut by_name = HashMap::with_capacity(drivers.len());
        for (row, driver) in drivers.iter().enumerate() {
            // First entry wins on duplicate names
            by_name.entry(driver.name.clone()).or_insert(row);
        }

        Self {
            drivers,
            records,
            by_name,
        }
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Enriched drivers, in roster order
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Search records, parallel to `drivers()`
    pub fn records(&self) -> &[RosterRecord] {
        &self.records
    }

    /// Look up a driver by exact display name
    pub fn get_driver(&self, name: &str) -> Option<&Driver> {
        self.by_name.get(name).map(|&row| &self.drivers[row])
    }

    /// Like `get_driver`, but missing names are an error
    pub fn find_driver(&self, name: &str) -> Result<&Driver> {
        self.get_driver(name).ok_or_else(|| RosterError::DriverNotFound {
            name: name.to_string(),
        })
    }

    /// Sorted distinct nationalities, placeholder excluded
    pub fn nationalities(&self) -> Vec<&str> {
        distinct(self.drivers.iter().map(|d| d.nationality.as_str()))
    }

    /// Sorted distinct teams, placeholder excluded
    pub fn teams(&self) -> Vec<&str> {
        distinct(self.drivers.iter().map(|d| d.team.as_str()))
    }

    /// Aggregate counts by nationality, team and birth decade
    pub fn stats(&self) -> RosterStats {
        let mut by_nationality: HashMap<&str, usize> = HashMap::new();
        let mut by_team: HashMap<&str, usize> = HashMap::new();
        let mut by_decade: BTreeMap<u16, usize> = BTreeMap::new();

        for driver in &self.drivers {
            *by_nationality.entry(driver.nationality.as_str()).or_insert(0) += 1;
            *by_team.entry(driver.team.as_str()).or_insert(0) += 1;
            if let Some(year) = parser::extract_birth_year(&driver.dob) {
                *by_decade.entry(year / 10 * 10).or_insert(0) += 1;
            }
        }

        RosterStats {
            total: self.drivers.len(),
            by_nationality: top_counts(by_nationality, TOP_BREAKDOWN),
            by_team: top_counts(by_team, TOP_BREAKDOWN),
            by_decade: by_decade
                .into_iter()
                .map(|(decade, count)| (format!("{}s", decade), count))
                .collect(),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values
        .filter(|v| *v != NOT_AVAILABLE)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Highest counts first, ties broken by name
fn top_counts(counts: HashMap<&str, usize>, limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(&str, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    counts
        .into_iter()
        .take(limit)
        .map(|(key, count)| (key.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_index() -> RosterIndex {
        let mut hamilton = Driver::new("Lewis Hamilton", "British (English)", "Mercedes");
        hamilton.dob = "7 January 1985".to_string();
        let mut russell = Driver::new("George Russell", "British", "Mercedes");
        russell.dob = "15 February 1998".to_string();
        let mut verstappen = Driver::new("Max Verstappen", "Dutch", "Red Bull");
        verstappen.dob = "30 September 1997".to_string();
        let unknown = Driver::new("Test Driver", "N/A", "N/A");

        RosterIndex::from_drivers(vec![hamilton, russell, verstappen, unknown], 2025)
    }

    #[test]
    fn test_records_follow_driver_order() {
        let index = create_test_index();
        assert_eq!(index.len(), 4);
        let names: Vec<&str> = index.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["lewis hamilton", "george russell", "max verstappen", "test driver"]
        );
        assert_eq!(index.records()[0].nationality, "british");
    }

    #[test]
    fn test_get_driver() {
        let index = create_test_index();
        let driver = index.get_driver("Max Verstappen").unwrap();
        assert_eq!(driver.age.as_deref(), Some("28"));
        assert!(index.get_driver("max verstappen").is_none());
        assert!(matches!(
            index.find_driver("Nobody"),
            Err(RosterError::DriverNotFound { .. })
        ));
    }

    #[test]
    fn test_options_are_sorted_and_distinct() {
        let index = create_test_index();
        assert_eq!(index.nationalities(), vec!["British", "Dutch"]);
        assert_eq!(index.teams(), vec!["Mercedes", "Red Bull"]);
    }

    #[test]
    fn test_stats() {
        let stats = create_test_index().stats();
        assert_eq!(stats.total, 4);
        // "British (English)" is counted under its enriched form
        assert_eq!(stats.by_nationality[0], ("British".to_string(), 2));
        assert!(stats.by_nationality.iter().all(|(n, _)| !n.contains('(')));
        assert_eq!(stats.by_team[0], ("Mercedes".to_string(), 2));
        assert_eq!(
            stats.by_decade,
            vec![("1980s".to_string(), 1), ("1990s".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_counts_limit_and_ties() {
        let counts = HashMap::from([("b", 1), ("a", 1), ("c", 3)]);
        let top = top_counts(counts, 2);
        assert_eq!(top, vec![("c".to_string(), 3), ("a".to_string(), 1)]);
    }

    #[test]
    fn test_empty_index() {
        let index = RosterIndex::default();
        assert!(index.is_empty());
        assert!(index.records().is_empty());
        assert_eq!(index.stats().total, 0);
    }
}
