//! # Roster Data Crate
//!
//! This crate loads the driver roster written by the crawler and prepares it
//! for filtering.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Driver, RosterRecord, RosterStats)
//! - **parser**: Parse `drivers.json` and enrich raw entries
//! - **index**: RosterIndex with search records, name lookup and aggregates
//! - **error**: Error types for roster loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use roster_data::RosterIndex;
//! use std::path::Path;
//!
//! let index = RosterIndex::load_from_file(Path::new("data/drivers.json"), 2025)?;
//!
//! let driver = index.get_driver("Lewis Hamilton").unwrap();
//! println!("{} drives for {}", driver.name, driver.team);
//!
//! // Lower-cased search records, one per driver, in roster order
//! let records = index.records();
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{Result, RosterError};
pub use index::RosterIndex;
pub use types::{Driver, RosterRecord, RosterStats, NOT_AVAILABLE};
