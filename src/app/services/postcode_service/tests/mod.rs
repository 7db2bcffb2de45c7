//! Tests for the postcode query/update service

use crate::app::models::Postcode;
use crate::app::services::postcode_service::PostcodeService;
use crate::app::store::MemoryStore;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

mod distance_tests;

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

/// Service over a store holding the two Westminster postcodes
pub fn westminster_service() -> PostcodeService<MemoryStore> {
    let store = MemoryStore::from_records(vec![
        Postcode::new(1, "SW1A 1AA", dec("51.5074"), dec("-0.1278")),
        Postcode::new(2, "SW1A 2AA", dec("40.5074"), dec("-1.1278")),
    ])
    .unwrap();
    PostcodeService::new(Arc::new(store))
}
