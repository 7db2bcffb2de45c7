use clap::Parser;
use std::process;
use uk_postcodes::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Nothing to import and no command: show help instead
    if !args.has_work() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("Failed to install CTRL+C signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(uk_postcodes::Error::processing_interrupted(
                    "Interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(if error.is_client_error() { 2 } else { 1 });
        }
    }
}

/// Show help information and available commands when there is nothing to do
fn show_help_and_commands() {
    println!("UK Postcodes - postcode import, lookup and distance service");
    println!("===========================================================");
    println!();
    println!("USAGE:");
    println!("    uk-postcodes [OPTIONS] [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    lookup      Look up a postcode");
    println!("    distance    Great-circle distance between two postcodes");
    println!("    update      Correct the coordinates of a postcode");
    println!();
    println!("EXAMPLES:");
    println!("    # Seed the store from a source file:");
    println!("    uk-postcodes --csv-path postcodes.csv --store postcodes.json");
    println!();
    println!("    # Distance between two postcodes as JSON:");
    println!("    uk-postcodes --store postcodes.json --format json distance \"SW1A 1AA\" \"SW1A 2AA\"");
    println!();
    println!("    # Correct coordinates:");
    println!(
        "    uk-postcodes --store postcodes.json update \"SW1A 1AA\" --latitude 51.5085 --longitude -0.1279"
    );
    println!();
    println!("For detailed help on any command, use:");
    println!("    uk-postcodes <COMMAND> --help");
}
