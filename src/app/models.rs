//! Data models for the UK postcode service
//!
//! This module contains one record type per boundary: the transient import
//! record produced by the parser, the canonical persisted postcode, and the
//! distance result composed by the query service. Response views for the
//! transport layer live in [`response`].

use crate::app::services::geo::GeoPoint;
use crate::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

pub mod response;

pub use response::{DistanceResponse, DistanceValueResponse, PostcodeResponse};

// =============================================================================
// Import Record Structure
// =============================================================================

/// A single parsed data line from a postcode source file
///
/// Every field is present and well-formed; the parser rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    /// Numeric identifier from the first column
    pub id: i64,

    /// Postcode text exactly as supplied (after trimming)
    pub postcode: String,

    /// Latitude in decimal degrees, parsed exactly
    pub latitude: Decimal,

    /// Longitude in decimal degrees, parsed exactly
    pub longitude: Decimal,

    /// 1-based line number in the source file
    pub line: usize,
}

// =============================================================================
// Canonical Postcode Structure
// =============================================================================

/// Canonical postcode record as held by the store
///
/// Both `id` and `postcode` are unique across the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postcode {
    /// Unique identifier
    pub id: i64,

    /// Unique postcode string, case and format as supplied
    pub postcode: String,

    /// Latitude in WGS84 decimal degrees
    pub latitude: Decimal,

    /// Longitude in WGS84 decimal degrees
    pub longitude: Decimal,
}

impl Postcode {
    /// Create a new postcode record
    pub fn new(id: i64, postcode: impl Into<String>, latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            id,
            postcode: postcode.into(),
            latitude,
            longitude,
        }
    }

    /// Replace the stored coordinates
    pub fn set_coordinates(&mut self, latitude: Decimal, longitude: Decimal) {
        self.latitude = latitude;
        self.longitude = longitude;
    }

    /// Get the location as a floating-point point for distance calculations
    pub fn geo_point(&self) -> Result<GeoPoint> {
        let latitude = self.latitude.to_f64().ok_or_else(|| {
            Error::data_validation(format!(
                "Latitude {} of postcode '{}' cannot be represented as f64",
                self.latitude, self.postcode
            ))
        })?;
        let longitude = self.longitude.to_f64().ok_or_else(|| {
            Error::data_validation(format!(
                "Longitude {} of postcode '{}' cannot be represented as f64",
                self.longitude, self.postcode
            ))
        })?;

        Ok(GeoPoint::new(latitude, longitude))
    }
}

impl From<ImportRecord> for Postcode {
    fn from(record: ImportRecord) -> Self {
        Self {
            id: record.id,
            postcode: record.postcode,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

// =============================================================================
// Distance Result Structure
// =============================================================================

/// Great-circle distance between two stored postcodes
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceResult {
    /// First looked-up postcode
    pub postcode1: Postcode,

    /// Second looked-up postcode
    pub postcode2: Postcode,

    /// Distance between the two, expressed in `unit`
    pub value: f64,

    /// Unit of `value` (always kilometers)
    pub unit: &'static str,
}
