//! Response views handed to the transport layer
//!
//! Coordinates serialise as JSON numbers; the canonical records keep them as
//! exact decimals.

use super::{DistanceResult, Postcode};
use rust_decimal::Decimal;
use serde::Serialize;

/// A single postcode as returned by lookup and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostcodeResponse {
    pub id: i64,
    pub postcode: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub longitude: Decimal,
}

/// Distance value and its unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceValueResponse {
    pub unit: String,
    pub value: f64,
}

/// Both postcodes plus the distance between them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceResponse {
    pub postcode1: PostcodeResponse,
    pub postcode2: PostcodeResponse,
    pub distance: DistanceValueResponse,
}

impl From<Postcode> for PostcodeResponse {
    fn from(postcode: Postcode) -> Self {
        Self {
            id: postcode.id,
            postcode: postcode.postcode,
            latitude: postcode.latitude,
            longitude: postcode.longitude,
        }
    }
}

impl From<DistanceResult> for DistanceResponse {
    fn from(result: DistanceResult) -> Self {
        Self {
            postcode1: result.postcode1.into(),
            postcode2: result.postcode2.into(),
            distance: DistanceValueResponse {
                unit: result.unit.to_string(),
                value: result.value,
            },
        }
    }
}
