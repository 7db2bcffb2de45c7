//! Query command handlers: lookup, distance and update

use tracing::debug;

use super::shared::{print_distance, print_postcode};
use super::startup::persist;
use crate::Result;
use crate::app::services::postcode_service::PostcodeService;
use crate::app::store::MemoryStore;
use crate::cli::args::{DistanceArgs, LookupArgs, OutputFormat, UpdateArgs};
use crate::config::Config;

/// Print the stored record for a postcode
pub async fn run_lookup(
    service: &PostcodeService<MemoryStore>,
    args: &LookupArgs,
    format: OutputFormat,
) -> Result<()> {
    let postcode = service.lookup(&args.postcode).await?;
    print_postcode(&postcode, format)
}

/// Print the distance between two postcodes
pub async fn run_distance(
    service: &PostcodeService<MemoryStore>,
    args: &DistanceArgs,
    format: OutputFormat,
) -> Result<()> {
    let result = service.distance(&args.postcode1, &args.postcode2).await?;
    print_distance(&result, format)
}

/// Correct the coordinates of a postcode and persist the store
pub async fn run_update(
    service: &PostcodeService<MemoryStore>,
    args: &UpdateArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let postcode = service
        .update_coordinates(&args.postcode, args.latitude, args.longitude)
        .await?;

    persist(service.store(), config).await?;
    debug!("Persisted update of '{}'", postcode.postcode);

    print_postcode(&postcode, format)
}
