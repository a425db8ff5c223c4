//! Error types for the roster-data crate.

use thiserror::Error;

/// Errors that can occur while loading and querying the roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// I/O error occurred while reading the roster file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The roster file is not valid JSON or doesn't match the driver layout
    #[error("Failed to parse roster file {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Entry at `index` in the roster array couldn't be used
    #[error("Invalid entry #{index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    /// No driver with the given display name exists
    #[error("Driver not found: {name}")]
    DriverNotFound { name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RosterError>;
