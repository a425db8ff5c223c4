//! Filter criteria and their normalization.

use serde::{Deserialize, Serialize};

/// The three filter inputs, as typed by the user.
///
/// Values are stored raw; `normalized()` produces the form that is actually
/// compared. An empty value after normalization places no constraint on its
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub team: String,
}

impl FilterCriteria {
    pub fn new(
        query: impl Into<String>,
        nationality: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            nationality: nationality.into(),
            team: team.into(),
        }
    }

    /// Criteria with only the free-text query set
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Trimmed, lower-cased copy of every field.
    ///
    /// Lowercasing here must stay the same as `RosterRecord::new` so both
    /// sides of a comparison are folded identically.
    pub fn normalized(&self) -> Self {
        Self {
            query: normalize(&self.query),
            nationality: normalize(&self.nationality),
            team: normalize(&self.team),
        }
    }

    /// Copy with characters other than ASCII letters, digits, whitespace,
    /// `-` and `'` dropped from the query. Used by the JSON query surface.
    pub fn sanitized(&self) -> Self {
        Self {
            query: sanitize_query(&self.query),
            ..self.clone()
        }
    }

    /// True when no field constrains anything
    pub fn is_unconstrained(&self) -> bool {
        let normalized = self.normalized();
        normalized.query.is_empty()
            && normalized.nationality.is_empty()
            && normalized.team.is_empty()
    }
}

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn sanitize_query(query: &str) -> String {
    query
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '\'')
        .collect()
}
