//! Core domain types for the driver roster.
//!
//! Two shapes of the same entry live here:
//! - `Driver` is the raw crawler output, every field a display string
//! - `RosterRecord` is the lower-cased search projection the filter engine reads

use serde::{Deserialize, Serialize};

/// Placeholder the crawler writes for fields it couldn't extract
pub const NOT_AVAILABLE: &str = "N/A";

// =============================================================================
// Driver
// =============================================================================

/// One roster entry as stored in `drivers.json`.
///
/// Every field is optional in the file. Missing display fields fall back to
/// `"N/A"`, missing name parts to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default = "not_available")]
    pub dob: String,
    /// Absent in older crawls; filled in by enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default = "not_available")]
    pub birthplace: String,
    #[serde(default = "not_available")]
    pub nationality: String,
    #[serde(default = "not_available")]
    pub team: String,
    #[serde(default = "not_available")]
    pub titles: String,
    #[serde(default = "not_available")]
    pub wins: String,
    #[serde(default = "not_available")]
    pub podiums: String,
    #[serde(default = "not_available")]
    pub poles: String,
    #[serde(default = "not_available")]
    pub number: String,
    #[serde(default)]
    pub wiki_url: String,
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

impl Driver {
    /// Minimal driver with only the searchable fields set, mostly for tests
    /// and fixtures.
    pub fn new(
        name: impl Into<String>,
        nationality: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let mut parts = name.split_whitespace();
        let first_name = parts.next().unwrap_or_default().to_string();
        let last_name = parts.collect::<Vec<_>>().join(" ");

        Self {
            name,
            first_name,
            last_name,
            dob: not_available(),
            age: None,
            birthplace: not_available(),
            nationality: nationality.into(),
            team: team.into(),
            titles: not_available(),
            wins: not_available(),
            podiums: not_available(),
            poles: not_available(),
            number: not_available(),
            wiki_url: String::new(),
        }
    }

    /// Age as a display string, `"N/A"` when it was never computed
    pub fn age_display(&self) -> &str {
        self.age.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

// =============================================================================
// RosterRecord
// =============================================================================

/// Search projection of a `Driver`: the three filterable attributes,
/// lower-cased once up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterRecord {
    pub name: String,
    pub nationality: String,
    pub team: String,
}

impl RosterRecord {
    pub fn new(name: &str, nationality: &str, team: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            nationality: nationality.to_lowercase(),
            team: team.to_lowercase(),
        }
    }
}

impl From<&Driver> for RosterRecord {
    fn from(driver: &Driver) -> Self {
        Self::new(&driver.name, &driver.nationality, &driver.team)
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Aggregate counts over the whole roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStats {
    pub total: usize,
    /// Most common nationalities, highest count first
    pub by_nationality: Vec<(String, usize)>,
    /// Most common teams, highest count first
    pub by_team: Vec<(String, usize)>,
    /// Birth decade label (e.g. "1980s") to count, in decade order
    pub by_decade: Vec<(String, usize)>,
}
