//! Command-line argument definitions for the UK postcode service
//!
//! Global options configure the store and the optional startup import; the
//! subcommands stand in for the query surface.

use crate::Result;
use crate::config::Config;
use crate::constants::ENV_CSV_PATH;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// CLI arguments for the UK postcode service
///
/// Seeds the postcode table from a delimited source file, then answers
/// lookups, distance queries and coordinate corrections.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "uk-postcodes",
    version,
    about = "Import, query and correct UK postcode coordinates",
    long_about = "Seeds a postcode reference table from an id,postcode,latitude,longitude \
                  source file in fixed-size atomic chunks, then looks postcodes up, computes \
                  great-circle distances between them and corrects stored coordinates within \
                  the UK bounding box."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source file to import before running the command
    ///
    /// Absent or blank skips the import and uses the existing store contents.
    #[arg(
        long = "csv-path",
        value_name = "PATH",
        global = true,
        help = "Source file to import at startup"
    )]
    pub csv_path: Option<String>,

    /// JSON snapshot backing the store
    #[arg(
        short = 's',
        long = "store",
        value_name = "FILE",
        global = true,
        help = "JSON snapshot file backing the postcode store"
    )]
    pub store_path: Option<PathBuf>,

    /// JSON configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "JSON configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Records committed per chunk during import
    #[arg(
        long = "chunk-size",
        value_name = "N",
        global = true,
        help = "Records committed per chunk during import"
    )]
    pub chunk_size: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress progress output and informational logs
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except warnings and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Query subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Look up a postcode
    Lookup(LookupArgs),
    /// Great-circle distance between two postcodes
    Distance(DistanceArgs),
    /// Correct the coordinates of a postcode
    Update(UpdateArgs),
}

/// Arguments for the lookup command
#[derive(Debug, Clone, Parser)]
pub struct LookupArgs {
    /// Postcode to find, matched exactly
    #[arg(value_name = "POSTCODE")]
    pub postcode: String,
}

/// Arguments for the distance command
#[derive(Debug, Clone, Parser)]
pub struct DistanceArgs {
    /// First postcode
    #[arg(value_name = "POSTCODE_1")]
    pub postcode1: String,

    /// Second postcode
    #[arg(value_name = "POSTCODE_2")]
    pub postcode2: String,
}

/// Arguments for the update command
#[derive(Debug, Clone, Parser)]
pub struct UpdateArgs {
    /// Postcode to update, matched exactly
    #[arg(value_name = "POSTCODE")]
    pub postcode: String,

    /// New latitude in decimal degrees
    #[arg(long = "latitude", value_name = "LAT", allow_negative_numbers = true)]
    pub latitude: Decimal,

    /// New longitude in decimal degrees
    #[arg(long = "longitude", value_name = "LON", allow_negative_numbers = true)]
    pub longitude: Decimal,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Whether there is anything to do: a command or a possible import
    pub fn has_work(&self) -> bool {
        self.command.is_some()
            || self.csv_path.is_some()
            || self.config_file.is_some()
            || std::env::var_os(ENV_CSV_PATH).is_some()
    }

    /// Log level forced by verbosity flags, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.quiet {
            Some("warn")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the effective configuration: file and environment, then flags
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load_layered(self.config_file.as_deref())?;
        self.apply_overrides(config)
    }

    /// Apply command-line flags on top of a loaded configuration and validate
    pub fn apply_overrides(&self, mut config: Config) -> Result<Config> {
        if let Some(csv_path) = &self.csv_path {
            config = config.with_csv_path(csv_path.clone());
        }
        if let Some(store_path) = &self.store_path {
            config = config.with_snapshot_path(store_path.clone());
        }
        if let Some(chunk_size) = self.chunk_size {
            config = config.with_chunk_size(chunk_size);
        }
        if !self.show_progress() {
            config = config.without_progress();
        }
        if let Some(level) = self.log_level_override() {
            config = config.with_log_level(level);
        }

        config.validate()?;
        Ok(config)
    }
}
