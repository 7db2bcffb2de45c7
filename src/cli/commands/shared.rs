//! Shared components for CLI commands
//!
//! Logging setup and output rendering used by every command.

use crate::app::models::{DistanceResponse, DistanceResult, Postcode, PostcodeResponse};
use crate::app::services::bulk_importer::ImportStats;
use crate::cli::args::OutputFormat;
use crate::{Error, Result};
use colored::Colorize;
use tracing::debug;

/// Set up structured logging on stderr
pub fn setup_logging(level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("uk_postcodes={}", level)));

    let result = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", level);
    Ok(())
}

/// Print a single postcode record
pub fn print_postcode(postcode: &Postcode, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!(
                "{} {}",
                postcode.postcode.bright_cyan().bold(),
                format!("(id {})", postcode.id).bright_black()
            );
            println!("   • latitude:  {}", postcode.latitude);
            println!("   • longitude: {}", postcode.longitude);
        }
        OutputFormat::Json => {
            let response = PostcodeResponse::from(postcode.clone());
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}

/// Print a distance between two postcodes
pub fn print_distance(result: &DistanceResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!(
                "{} -> {}: {} {}",
                result.postcode1.postcode.bright_cyan().bold(),
                result.postcode2.postcode.bright_cyan().bold(),
                format!("{:.3}", result.value).bright_green().bold(),
                result.unit
            );
        }
        OutputFormat::Json => {
            let response = DistanceResponse::from(result.clone());
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}

/// Print the report for a completed import
pub fn print_import_report(stats: &ImportStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{}", "Postcode import complete".bright_green().bold());
            println!("   • Source: {}", stats.source);
            println!(
                "   • Started: {}",
                stats.started_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("   • Lines read: {}", stats.lines_read);
            println!("   • Blank lines skipped: {}", stats.blank_lines_skipped);
            println!("   • Postcodes imported: {}", stats.records_written);
            println!("   • Chunks committed: {}", stats.chunks_committed);
            println!(
                "   • Elapsed: {:.2}s ({:.0} records/s)",
                stats.elapsed.as_secs_f64(),
                stats.records_per_second()
            );
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "source": stats.source,
                "started_at": stats.started_at.to_rfc3339(),
                "lines_read": stats.lines_read,
                "header_lines_skipped": stats.header_lines_skipped,
                "blank_lines_skipped": stats.blank_lines_skipped,
                "records_written": stats.records_written,
                "chunks_committed": stats.chunks_committed,
                "elapsed_seconds": stats.elapsed.as_secs_f64(),
                "records_per_second": stats.records_per_second(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
