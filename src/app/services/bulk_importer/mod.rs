//! Bulk importer for postcode source files
//!
//! Streams a header-plus-data file line by line, parses each data line and
//! commits records in fixed-size chunks through a
//! [`ChunkWriter`](crate::app::store::ChunkWriter).
//!
//! ## Architecture
//!
//! - [`importer`] - the chunking import loop
//! - [`stats`] - counters and timing for a run

pub mod importer;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use importer::BulkImporter;
pub use stats::ImportStats;
