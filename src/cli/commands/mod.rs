//! Command implementations for the UK postcode CLI
//!
//! `run` loads the configuration, starts logging, bootstraps the store (with
//! the optional startup import) and then dispatches to the query handler for
//! the chosen subcommand.

pub mod query;
pub mod shared;
pub mod startup;

pub use startup::bootstrap;

use crate::Result;
use crate::app::services::postcode_service::PostcodeService;
use crate::cli::args::{Args, Commands, OutputFormat};
use tracing::info;

/// Main command runner
pub async fn run(args: Args) -> Result<()> {
    let config = args.load_config()?;
    shared::setup_logging(&config.logging.level, args.quiet)?;

    let (store, import_stats) = bootstrap(&config).await?;

    if let Some(stats) = &import_stats {
        if args.command.is_none() || args.output_format == OutputFormat::Human {
            shared::print_import_report(stats, args.output_format)?;
        }
    }

    let Some(command) = args.command else {
        if import_stats.is_none() {
            info!("No source file configured and no command given, nothing to do");
        }
        return Ok(());
    };

    let service = PostcodeService::new(store);
    match command {
        Commands::Lookup(lookup) => query::run_lookup(&service, &lookup, args.output_format).await,
        Commands::Distance(distance) => {
            query::run_distance(&service, &distance, args.output_format).await
        }
        Commands::Update(update) => {
            query::run_update(&service, &update, &config, args.output_format).await
        }
    }
}
