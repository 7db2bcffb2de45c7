//! Query/update operations over a postcode store

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

use crate::app::models::{DistanceResult, Postcode};
use crate::app::services::geo::{BoundingBox, distance_km};
use crate::app::store::PostcodeStore;
use crate::constants::DISTANCE_UNIT;
use crate::{Error, Result};

/// Lookup, distance and coordinate correction over a shared store
#[derive(Debug)]
pub struct PostcodeService<S: PostcodeStore> {
    store: Arc<S>,
    bounds: BoundingBox,
}

impl<S: PostcodeStore> Clone for PostcodeService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            bounds: self.bounds,
        }
    }
}

impl<S: PostcodeStore> PostcodeService<S> {
    /// Create a service validating updates against the UK bounding box
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            bounds: BoundingBox::UK,
        }
    }

    /// Validate updates against a different bounding box
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }

    /// Shared handle to the underlying store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Find the stored record for an exact postcode
    pub async fn lookup(&self, postcode: &str) -> Result<Postcode> {
        debug!("Looking up postcode '{}'", postcode);
        self.store
            .find_by_postcode(postcode)
            .await?
            .ok_or_else(|| Error::not_found(postcode))
    }

    /// Replace the coordinates of a stored postcode
    ///
    /// Coordinates are checked before the store is touched, so an
    /// out-of-bounds request never reads or writes anything.
    pub async fn update_coordinates(
        &self,
        postcode: &str,
        latitude: Decimal,
        longitude: Decimal,
    ) -> Result<Postcode> {
        self.bounds.validate(latitude, longitude)?;

        let mut record = self.lookup(postcode).await?;
        record.set_coordinates(latitude, longitude);
        self.store.save(&record).await?;

        debug!(
            "Updated postcode '{}' to ({}, {})",
            record.postcode, record.latitude, record.longitude
        );
        Ok(record)
    }

    /// Great-circle distance in kilometers between two stored postcodes
    pub async fn distance(&self, postcode1: &str, postcode2: &str) -> Result<DistanceResult> {
        let first = self.lookup(postcode1).await?;
        let second = self.lookup(postcode2).await?;

        let value = distance_km(first.geo_point()?, second.geo_point()?);
        debug!(
            "Distance '{}' -> '{}' is {} {}",
            first.postcode, second.postcode, value, DISTANCE_UNIT
        );

        Ok(DistanceResult {
            postcode1: first,
            postcode2: second,
            value,
            unit: DISTANCE_UNIT,
        })
    }
}
