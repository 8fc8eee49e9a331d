//! Command implementations for the catalog processor CLI
//!
//! This module contains the command execution logic: logging setup, input
//! and output stream selection, JSON emission, and summary reporting.

use colored::Colorize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::app::services::catalog_parser::{CatalogReader, LoggingSink, ParseStats};
use crate::app::services::record_resolver;
use crate::cli::args::{Args, CheckArgs, Commands, ConvertArgs, EmitFormat};
use crate::config::{OutputLayout, RunConfig};
use crate::{Error, Result};

impl From<EmitFormat> for OutputLayout {
    fn from(format: EmitFormat) -> Self {
        match format {
            EmitFormat::Record => OutputLayout::Record,
            EmitFormat::Entry => OutputLayout::Entry,
        }
    }
}

/// Main command runner for the catalog processor
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Convert(args) => run_convert(args),
        Commands::Check(args) => run_check(args),
    }
}

/// Convert a catalog to JSON entries or records
fn run_convert(args: ConvertArgs) -> Result<()> {
    setup_logging(args.get_log_level());

    info!("Starting catalog conversion");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = RunConfig {
        strict: args.strict,
        layout: args.format.into(),
        compact: args.compact,
    };

    let reader = catalog_reader(args.input.clone());
    let mut entries = reader.entries(LoggingSink::new(config.strict))?;
    let mut out = open_output(args.output.as_deref())?;

    if config.compact {
        // JSON Lines: emit each value as soon as its line parses, so
        // arbitrarily large catalogs stream in constant memory.
        while let Some(entry) = entries.next() {
            let entry = entry?;
            match config.layout {
                OutputLayout::Record => {
                    serde_json::to_writer(&mut out, &record_resolver::derive(&entry)?)?
                }
                OutputLayout::Entry => serde_json::to_writer(&mut out, &entry)?,
            }
            out.write_all(b"\n")?;
        }
    } else {
        let mut parsed = Vec::new();
        while let Some(entry) = entries.next() {
            parsed.push(entry?);
        }

        match config.layout {
            OutputLayout::Record => {
                let records = parsed
                    .iter()
                    .map(record_resolver::derive)
                    .collect::<Result<Vec<_>>>()?;
                serde_json::to_writer_pretty(&mut out, &records)?;
            }
            OutputLayout::Entry => serde_json::to_writer_pretty(&mut out, &parsed)?,
        }
        out.write_all(b"\n")?;
    }

    out.flush()?;

    let stats = entries.stats();
    info!(
        "Parsed {} entries from {} lines ({} skipped)",
        stats.entries_parsed, stats.total_lines, stats.lines_skipped
    );

    Ok(())
}

/// Parse a catalog and report statistics without emitting output
fn run_check(args: CheckArgs) -> Result<()> {
    setup_logging(args.get_log_level());

    info!("Starting catalog check");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let reader = catalog_reader(args.input.clone());
    let mut entries = reader.entries(LoggingSink::new(args.strict))?;

    let mut outcome: Result<()> = Ok(());
    while let Some(item) = entries.next() {
        if let Err(error) = item {
            outcome = Err(error);
            break;
        }
    }

    print_check_summary(entries.stats());
    outcome
}

/// Print a human-readable summary of a check run
fn print_check_summary(stats: &ParseStats) {
    println!("{}", "Catalog check".bold());
    println!("  lines read:     {}", stats.total_lines);
    println!(
        "  entries parsed: {}",
        stats.entries_parsed.to_string().green()
    );

    if stats.lines_skipped == 0 {
        println!("  lines skipped:  {}", stats.lines_skipped);
    } else {
        println!(
            "  lines skipped:  {}",
            stats.lines_skipped.to_string().red()
        );
        for error in &stats.errors {
            println!("    {} {}", "failed".red(), error);
        }
    }

    println!("  success rate:   {:.1}%", stats.success_rate());
}

/// Build a catalog reader over the input file, or stdin when none is given
///
/// A file input yields a repeatable source; stdin can only be traversed
/// once, which is all the commands here need.
fn catalog_reader(input: Option<PathBuf>) -> CatalogReader<impl Fn() -> io::Result<Box<dyn BufRead>>> {
    CatalogReader::new(move || -> io::Result<Box<dyn BufRead>> {
        match &input {
            Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            None => Ok(Box::new(io::stdin().lock())),
        }
    })
}

/// Open the output file, or stdout when none is given
fn open_output(output: Option<&std::path::Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::io(format!("failed to create output file {}", path.display()), e)
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Set up logging with the given level
///
/// Honors `RUST_LOG` when set. Logs go to stderr so that JSON output on
/// stdout stays machine-readable.
fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalog_processor={}", log_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr),
        )
        .try_init();
}
