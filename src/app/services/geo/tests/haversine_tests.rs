//! Tests for haversine distance calculations

use super::super::haversine::{GeoPoint, distance_km};

const TOLERANCE: f64 = 1e-9;

fn sample_points() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(51.5074, -0.1278),   // London
        GeoPoint::new(40.5074, -1.1278),   // Spain
        GeoPoint::new(57.1497, -2.0943),   // Aberdeen
        GeoPoint::new(50.0657, -5.7132),   // Land's End
        GeoPoint::new(60.8, -0.8),         // Unst
        GeoPoint::new(-33.8688, 151.2093), // Sydney
        GeoPoint::new(90.0, 0.0),
        GeoPoint::new(-90.0, 0.0),
    ]
}

#[test]
fn test_known_distance() {
    let from = GeoPoint::new(51.5074, -0.1278);
    let to = GeoPoint::new(40.5074, -1.1278);

    let distance = distance_km(from, to);
    assert!(
        (distance - 1225.5484327780487).abs() < TOLERANCE,
        "unexpected distance {}",
        distance
    );
}

#[test]
fn test_identical_points_are_zero() {
    for point in sample_points() {
        assert_eq!(distance_km(point, point), 0.0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let points = sample_points();
    for a in &points {
        for b in &points {
            let forward = distance_km(*a, *b);
            let backward = distance_km(*b, *a);
            assert!(
                (forward - backward).abs() < TOLERANCE,
                "{:?} -> {:?}: {} vs {}",
                a,
                b,
                forward,
                backward
            );
        }
    }
}

#[test]
fn test_pole_to_pole_is_half_circumference() {
    let distance = distance_km(GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0));
    let expected = std::f64::consts::PI * 6371.0;
    assert!((distance - expected).abs() < 1e-6);
}

#[test]
fn test_one_degree_of_latitude() {
    let distance = distance_km(GeoPoint::new(51.0, 0.0), GeoPoint::new(52.0, 0.0));
    assert!((distance - 111.19492664455873).abs() < 1e-6);
}
