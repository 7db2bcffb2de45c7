//! Tests for bounding-box validation and haversine distances

mod bounds_tests;
mod haversine_tests;
