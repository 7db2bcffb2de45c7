//! Record parser for postcode source lines
//!
//! Converts one raw `id,postcode,latitude,longitude` line into an
//! [`ImportRecord`](crate::app::models::ImportRecord), rejecting anything
//! malformed with an error naming the line and, where known, the field.
//!
//! ## Architecture
//!
//! - [`parser`] - line classification and tokenisation
//! - [`field_parsers`] - typed extraction of individual fields
//!
//! ## Usage
//!
//! ```rust
//! use uk_postcodes::app::services::record_parser::{LineKind, RecordParser};
//!
//! let parser = RecordParser::new();
//! match parser.classify(2, "1,SW1A 1AA,51.5074,-0.1278") {
//!     LineKind::Data(line) => {
//!         let record = parser.parse(2, line).unwrap();
//!         assert_eq!(record.postcode, "SW1A 1AA");
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod field_parsers;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{LineKind, RecordParser};
