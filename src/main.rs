use catalog_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Catalog Processor - Fixed-Width Product Catalog Converter");
    println!("=========================================================");
    println!();
    println!("Convert fixed-width retail product catalog files into JSON catalog");
    println!("entries or resolved product records.");
    println!();
    println!("USAGE:");
    println!("    catalog-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a catalog file to JSON (main command)");
    println!("    check       Parse a catalog file and report statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a catalog to product records on stdout:");
    println!("    catalog-processor convert --input catalog.txt");
    println!();
    println!("    # Emit raw catalog entries as JSON Lines, failing on any bad line:");
    println!("    catalog-processor convert -i catalog.txt -f entry --compact --strict");
    println!();
    println!("    # Validate a catalog read from stdin:");
    println!("    catalog-processor check < catalog.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    catalog-processor <COMMAND> --help");
}
