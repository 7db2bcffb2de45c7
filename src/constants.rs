//! Application constants for the UK postcode service
//!
//! This module contains geographic bounds, import defaults, and the
//! environment variable names used throughout the application.

use rust_decimal::Decimal;

// =============================================================================
// Geographic Constants
// =============================================================================

/// Mean Earth radius used by the haversine formula, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Unit reported alongside computed distances
pub const DISTANCE_UNIT: &str = "km";

/// UK bounding box applied to coordinate updates (inclusive on every edge)
pub mod uk_bounds {
    use super::Decimal;

    /// Southern edge: 49.9
    pub const MIN_LATITUDE: Decimal = Decimal::from_parts(499, 0, 0, false, 1);

    /// Northern edge: 60.9
    pub const MAX_LATITUDE: Decimal = Decimal::from_parts(609, 0, 0, false, 1);

    /// Western edge: -8.2
    pub const MIN_LONGITUDE: Decimal = Decimal::from_parts(82, 0, 0, true, 1);

    /// Eastern edge: 1.8
    pub const MAX_LONGITUDE: Decimal = Decimal::from_parts(18, 0, 0, false, 1);
}

// =============================================================================
// Import Constants
// =============================================================================

/// Number of records committed per chunk unless configured otherwise
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Number of leading lines treated as a header and never parsed
pub const HEADER_LINES: usize = 1;

/// Field delimiter for source files
pub const FIELD_DELIMITER: u8 = b',';

/// Column names of the source schema, in order
pub const SOURCE_COLUMNS: [&str; 4] = ["id", "postcode", "latitude", "longitude"];

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides `import.csv_path`
pub const ENV_CSV_PATH: &str = "UK_POSTCODES_CSV_PATH";

/// Overrides `import.chunk_size`
pub const ENV_CHUNK_SIZE: &str = "UK_POSTCODES_CHUNK_SIZE";

/// Overrides `store.snapshot_path`
pub const ENV_STORE_PATH: &str = "UK_POSTCODES_STORE";

/// Overrides `logging.level`
pub const ENV_LOG_LEVEL: &str = "UK_POSTCODES_LOG_LEVEL";
