//! Tests for distance between stored postcodes

use super::{dec, westminster_service};
use crate::Error;

#[tokio::test]
async fn test_distance_between_postcodes() {
    let service = westminster_service();

    let result = service.distance("SW1A 1AA", "SW1A 2AA").await.unwrap();

    assert_eq!(result.unit, "km");
    assert!((result.value - 1225.5484327780487).abs() < 1e-9);
    assert_eq!(result.postcode1.postcode, "SW1A 1AA");
    assert_eq!(result.postcode2.postcode, "SW1A 2AA");
}

#[tokio::test]
async fn test_distance_is_symmetric() {
    let service = westminster_service();

    let forward = service.distance("SW1A 1AA", "SW1A 2AA").await.unwrap();
    let backward = service.distance("SW1A 2AA", "SW1A 1AA").await.unwrap();

    assert!((forward.value - backward.value).abs() < 1e-9);
}

#[tokio::test]
async fn test_distance_to_self_is_zero() {
    let service = westminster_service();

    let result = service.distance("SW1A 1AA", "SW1A 1AA").await.unwrap();

    assert_eq!(result.value, 0.0);
}

#[tokio::test]
async fn test_distance_with_missing_postcode() {
    let service = westminster_service();

    match service.distance("SW1A 1AA", "ZZ99 9ZZ").await {
        Err(Error::NotFound { postcode }) => assert_eq!(postcode, "ZZ99 9ZZ"),
        other => panic!("expected not found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_distance_reflects_updated_coordinates() {
    let service = westminster_service();

    service
        .update_coordinates("SW1A 2AA", dec("51.5074"), dec("-0.1278"))
        .await
        .unwrap();

    let result = service.distance("SW1A 1AA", "SW1A 2AA").await.unwrap();
    assert_eq!(result.value, 0.0);
}
