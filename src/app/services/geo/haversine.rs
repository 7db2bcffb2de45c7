//! Great-circle distance using the haversine formula

use crate::constants::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};

/// A point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Distance in kilometers between two points on a sphere of radius 6371 km
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`,
/// `c = 2·atan2(√a, √(1−a))`, distance = R·c.
///
/// # Examples
/// ```
/// use uk_postcodes::app::services::geo::{GeoPoint, distance_km};
///
/// let london = GeoPoint::new(51.5074, -0.1278);
/// assert_eq!(distance_km(london, london), 0.0);
/// ```
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lon2 = to.longitude.to_radians();

    let a = half_angle_sine_squared(lat1, lat2)
        + lat1.cos() * lat2.cos() * half_angle_sine_squared(lon1, lon2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// sin²((a - b) / 2)
fn half_angle_sine_squared(a: f64, b: f64) -> f64 {
    let s = ((a - b) / 2.0).sin();
    s * s
}
