//! Parser for the roster file.
//!
//! The crawler writes `drivers.json`: a JSON array of driver objects whose
//! fields are all display strings. This module reads that file and enriches
//! each entry with the computed fields the raw crawl leaves out:
//! - nationality with parenthesized notes stripped ("British (English)" -> "British")
//! - age derived from the first year found in the date of birth

use crate::error::{Result, RosterError};
use crate::types::{Driver, NOT_AVAILABLE};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse the roster file into raw drivers, in file order.
///
/// A missing file is not an error: it means the crawler hasn't run yet,
/// and the roster is simply empty.
pub fn parse_drivers(path: &Path) -> Result<Vec<Driver>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Roster file {} not found, using empty roster", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    parse_drivers_str(&content).map_err(|e| match e {
        RosterError::ParseError { source, .. } => RosterError::ParseError {
            file: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Parse roster JSON from an in-memory string
pub fn parse_drivers_str(content: &str) -> Result<Vec<Driver>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(content).map_err(|source| RosterError::ParseError {
            file: "<memory>".to_string(),
            source,
        })?;

    let mut drivers = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_object() {
            return Err(RosterError::InvalidEntry {
                index,
                reason: format!("expected an object, found {}", value),
            });
        }
        let driver: Driver = serde_json::from_value(value).map_err(|e| RosterError::InvalidEntry {
            index,
            reason: e.to_string(),
        })?;
        drivers.push(driver);
    }
    Ok(drivers)
}

/// Fill in computed fields the raw crawl doesn't carry.
///
/// An age already present in the file is kept as is.
pub fn enrich(mut driver: Driver, reference_year: u16) -> Driver {
    if driver.age.is_none() {
        let age = extract_birth_year(&driver.dob)
            .map(|year| (i32::from(reference_year) - i32::from(year)).to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        driver.age = Some(age);
    }

    let nationality = strip_parenthesized(&driver.nationality);
    let nationality = nationality.trim();
    driver.nationality = if nationality.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        nationality.to_string()
    };

    driver
}

/// Find the first 19xx or 20xx year inside a date string
///
/// Example: "3 January 1985 (age 40)" -> Some(1985)
///          "N/A" -> None
pub fn extract_birth_year(dob: &str) -> Option<u16> {
    dob.as_bytes()
        .windows(4)
        .find(|w| {
            (w.starts_with(b"19") || w.starts_with(b"20"))
                && w.iter().all(|b| b.is_ascii_digit())
        })
        .and_then(|w| std::str::from_utf8(w).ok())
        .and_then(|s| s.parse().ok())
}

/// Remove every "( ... )" segment, shortest match first.
///
/// An opening parenthesis without a closing one is left in place.
fn strip_parenthesized(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
