//! Geospatial helpers for postcode coordinates
//!
//! Two pure building blocks used by the query service:
//! - [`bounds`] - UK bounding-box validation applied to coordinate updates
//! - [`haversine`] - great-circle distance between two points

pub mod bounds;
pub mod haversine;

#[cfg(test)]
pub mod tests;

pub use bounds::{Axis, BoundingBox};
pub use haversine::{GeoPoint, distance_km};
