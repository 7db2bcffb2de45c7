//! Tests for the in-memory store and its snapshot persistence

use crate::app::models::Postcode;
use rust_decimal::Decimal;
use std::str::FromStr;


/// Helper to create a postcode record from string coordinates
pub fn postcode(id: i64, code: &str, latitude: &str, longitude: &str) -> Postcode {
    Postcode::new(
        id,
        code,
        Decimal::from_str(latitude).unwrap(),
        Decimal::from_str(longitude).unwrap(),
    )
}
