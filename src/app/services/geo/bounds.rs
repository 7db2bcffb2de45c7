//! UK bounding-box validation
//!
//! Coordinates supplied to an update must fall inside the box on both axes.
//! Each axis is checked independently and the first violation is reported
//! with the allowed range so callers can build a user-facing message.

use crate::constants::uk_bounds;
use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate axis named in bounds violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Inclusive latitude/longitude rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_latitude: Decimal,
    pub max_latitude: Decimal,
    pub min_longitude: Decimal,
    pub max_longitude: Decimal,
}

impl BoundingBox {
    /// The UK box: latitude 49.9..=60.9, longitude -8.2..=1.8
    pub const UK: BoundingBox = BoundingBox {
        min_latitude: uk_bounds::MIN_LATITUDE,
        max_latitude: uk_bounds::MAX_LATITUDE,
        min_longitude: uk_bounds::MIN_LONGITUDE,
        max_longitude: uk_bounds::MAX_LONGITUDE,
    };

    /// Check a coordinate pair, latitude first
    pub fn validate(&self, latitude: Decimal, longitude: Decimal) -> Result<()> {
        if !(self.min_latitude..=self.max_latitude).contains(&latitude) {
            return Err(Error::out_of_bounds(
                Axis::Latitude,
                latitude,
                self.min_latitude,
                self.max_latitude,
            ));
        }

        if !(self.min_longitude..=self.max_longitude).contains(&longitude) {
            return Err(Error::out_of_bounds(
                Axis::Longitude,
                longitude,
                self.min_longitude,
                self.max_longitude,
            ));
        }

        Ok(())
    }

}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::UK
    }
}
