//! UK Postcodes Library
//!
//! A Rust library for maintaining a reference table of UK postcodes seeded
//! from a one-shot bulk import of a delimited text file.
//!
//! This library provides tools for:
//! - Parsing `id,postcode,latitude,longitude` source lines into exact-decimal records
//! - Streaming imports committed to storage in fixed-size atomic chunks
//! - Looking up postcodes and computing great-circle (haversine) distances
//! - Correcting stored coordinates within the UK bounding box
//! - An in-memory store adapter with JSON snapshot persistence

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bulk_importer;
        pub mod geo;
        pub mod postcode_service;
        pub mod record_parser;
    }
    pub mod store;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

use rust_decimal::Decimal;

// Re-export commonly used types
pub use app::models::{DistanceResult, ImportRecord, Postcode};
pub use app::services::geo::Axis;
pub use config::Config;

/// Result type alias for postcode operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for import, query and update operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A source line could not be turned into an import record
    #[error("Malformed record at line {line}{}: {message}", field_suffix(.field))]
    MalformedRecord {
        line: usize,
        field: Option<String>,
        message: String,
    },

    /// A write collided with an existing identifier or postcode
    #[error("Uniqueness conflict: {column} '{value}' already exists")]
    UniquenessConflict { column: &'static str, value: String },

    /// No record matches the requested postcode
    #[error("Postcode not found: {postcode}")]
    NotFound { postcode: String },

    /// Coordinate outside the UK bounding box
    #[error("{axis} {value} is out of valid UK bounds: expected between {min} and {max}")]
    OutOfBounds {
        axis: Axis,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    /// Store adapter failure
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Snapshot encoding or decoding failed
    #[error("Snapshot error: {message}")]
    Snapshot {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed record error for a source line
    pub fn malformed_record(
        line: usize,
        field: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            line,
            field: field.map(str::to_string),
            message: message.into(),
        }
    }

    /// Create a uniqueness conflict error
    pub fn uniqueness_conflict(column: &'static str, value: impl ToString) -> Self {
        Self::UniquenessConflict {
            column,
            value: value.to_string(),
        }
    }

    /// Create a postcode not found error
    pub fn not_found(postcode: impl Into<String>) -> Self {
        Self::NotFound {
            postcode: postcode.into(),
        }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(axis: Axis, value: Decimal, min: Decimal, max: Decimal) -> Self {
        Self::OutOfBounds {
            axis,
            value,
            min,
            max,
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a snapshot error
    pub fn snapshot(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Snapshot {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Whether the error describes a bad request rather than an operational failure
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::OutOfBounds { .. })
    }
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_ref()
        .map(|name| format!(" (field '{}')", name))
        .unwrap_or_default()
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Snapshot {
            message: "JSON encoding failed".to_string(),
            source: error,
        }
    }
}
