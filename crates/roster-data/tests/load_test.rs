//! Loading the roster from disk.

use roster_data::{RosterError, RosterIndex, NOT_AVAILABLE};
use std::fs;
use tempfile::tempdir;

const ROSTER_JSON: &str = r#"[
  {
    "name": "Lewis Hamilton",
    "first_name": "Lewis",
    "last_name": "Hamilton",
    "dob": "7 January 1985",
    "nationality": "British (English)",
    "team": "Mercedes",
    "wins": "105",
    "wiki_url": "https://en.wikipedia.org/wiki/Lewis_Hamilton"
  },
  {
    "name": "Max Verstappen",
    "dob": "30 September 1997",
    "age": "27",
    "nationality": "Dutch",
    "team": "Red Bull"
  },
  {
    "name": "Kimi Räikkönen",
    "nationality": "Finnish"
  }
]"#;

#[test]
fn test_load_from_file_enriches_drivers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drivers.json");
    fs::write(&path, ROSTER_JSON).unwrap();

    let index = RosterIndex::load_from_file(&path, 2025).unwrap();
    assert_eq!(index.len(), 3);

    let hamilton = index.get_driver("Lewis Hamilton").unwrap();
    assert_eq!(hamilton.nationality, "British");
    assert_eq!(hamilton.age_display(), "40");
    assert_eq!(hamilton.wins, "105");

    let verstappen = index.get_driver("Max Verstappen").unwrap();
    assert_eq!(verstappen.age_display(), "27");

    let kimi = index.get_driver("Kimi Räikkönen").unwrap();
    assert_eq!(kimi.team, NOT_AVAILABLE);
    assert_eq!(kimi.age_display(), NOT_AVAILABLE);
    assert_eq!(index.records()[2].name, "kimi räikkönen");
}

#[test]
fn test_missing_file_is_empty_roster() {
    let dir = tempdir().unwrap();
    let index = RosterIndex::load_from_file(&dir.path().join("nope.json"), 2025).unwrap();
    assert!(index.is_empty());
    assert!(index.nationalities().is_empty());
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drivers.json");
    fs::write(&path, "[{\"name\": ").unwrap();

    match RosterIndex::load_from_file(&path, 2025) {
        Err(RosterError::ParseError { file, .. }) => assert!(file.ends_with("drivers.json")),
        other => panic!("expected parse error, got {:?}", other),
    }
}
