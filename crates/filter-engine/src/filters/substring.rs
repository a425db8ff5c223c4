//! Substring containment filter over one record field.

use crate::traits::Filter;
use roster_data::RosterRecord;

/// Which searchable attribute of a record a filter reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Name,
    Nationality,
    Team,
}

impl RecordField {
    pub fn value<'a>(&self, record: &'a RosterRecord) -> &'a str {
        match self {
            RecordField::Name => &record.name,
            RecordField::Nationality => &record.nationality,
            RecordField::Team => &record.team,
        }
    }
}

/// Keeps records whose `field` contains `needle` as a contiguous substring.
///
/// The needle is expected to be normalized already (see
/// `FilterCriteria::normalized`). An empty needle keeps everything.
pub struct SubstringFilter {
    name: &'static str,
    field: RecordField,
    needle: String,
}

impl SubstringFilter {
    pub fn new(field: RecordField, needle: impl Into<String>) -> Self {
        let name = match field {
            RecordField::Name => "NameQueryFilter",
            RecordField::Nationality => "NationalityFilter",
            RecordField::Team => "TeamFilter",
        };
        Self {
            name,
            field,
            needle: needle.into(),
        }
    }
}

impl Filter for SubstringFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &RosterRecord) -> bool {
        self.needle.is_empty() || self.field.value(record).contains(self.needle.as_str())
    }
}
