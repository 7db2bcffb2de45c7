//! Tests for UK bounding-box validation

use super::super::bounds::{Axis, BoundingBox};
use crate::Error;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

#[test]
fn test_central_london_is_valid() {
    assert!(BoundingBox::UK.validate(dec("51.5074"), dec("-0.1278")).is_ok());
}

#[test]
fn test_exact_edges_are_inclusive() {
    for (lat, lon) in [
        ("49.9", "-8.2"),
        ("49.9", "1.8"),
        ("60.9", "-8.2"),
        ("60.9", "1.8"),
        ("49.90", "1.800"),
    ] {
        assert!(
            BoundingBox::UK.validate(dec(lat), dec(lon)).is_ok(),
            "({}, {}) should be inside the UK box",
            lat,
            lon
        );
    }
}

#[test]
fn test_latitude_outside_reports_axis_and_range() {
    match BoundingBox::UK.validate(dec("61.0"), dec("-0.1279")) {
        Err(Error::OutOfBounds {
            axis,
            value,
            min,
            max,
        }) => {
            assert_eq!(axis, Axis::Latitude);
            assert_eq!(value, dec("61.0"));
            assert_eq!(min, dec("49.9"));
            assert_eq!(max, dec("60.9"));
        }
        other => panic!("Expected OutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_longitude_outside_reports_axis_and_range() {
    match BoundingBox::UK.validate(dec("51.0"), dec("2.0")) {
        Err(Error::OutOfBounds { axis, min, max, .. }) => {
            assert_eq!(axis, Axis::Longitude);
            assert_eq!(min, dec("-8.2"));
            assert_eq!(max, dec("1.8"));
        }
        other => panic!("Expected OutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_just_outside_each_edge() {
    let cases = [
        ("49.8999", "0.0", Axis::Latitude),
        ("60.9001", "0.0", Axis::Latitude),
        ("55.0", "-8.2001", Axis::Longitude),
        ("55.0", "1.8001", Axis::Longitude),
        ("100.0", "-0.1278", Axis::Latitude),
        ("-51.5", "-0.1278", Axis::Latitude),
    ];

    for (lat, lon, expected_axis) in cases {
        match BoundingBox::UK.validate(dec(lat), dec(lon)) {
            Err(Error::OutOfBounds { axis, .. }) => assert_eq!(axis, expected_axis),
            other => panic!("({}, {}) expected OutOfBounds, got {:?}", lat, lon, other),
        }
    }
}

#[test]
fn test_latitude_checked_before_longitude() {
    match BoundingBox::UK.validate(dec("0.0"), dec("100.0")) {
        Err(Error::OutOfBounds { axis, .. }) => assert_eq!(axis, Axis::Latitude),
        other => panic!("Expected OutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_default_box_is_uk() {
    let bbox = BoundingBox::default();
    assert_eq!(bbox, BoundingBox::UK);
    assert!(bbox.validate(dec("57.1"), dec("-2.1")).is_ok());
    assert!(bbox.validate(dec("48.0"), dec("-2.1")).is_err());
}
