//! Postcode query and update service
//!
//! Looks postcodes up by exact match, corrects stored coordinates within
//! the UK bounding box and computes great-circle distances between stored
//! postcodes. The service holds nothing but a shared handle to the store.

pub mod service;

#[cfg(test)]
pub mod tests;

pub use service::PostcodeService;
