//! Command-line argument definitions for the catalog processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the catalog processor
///
/// Converts fixed-width retail product catalog files into JSON catalog
/// entries or resolved product records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog-processor",
    version,
    about = "Convert fixed-width product catalog files to JSON",
    long_about = "Processes fixed-width retail product catalog files into structured JSON. \
                  Each 142-character line is parsed into a catalog entry; entries can be \
                  emitted as-is or resolved into product records with display prices, \
                  per-unit calculation prices, unit of measure, and tax rate."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the catalog processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a catalog file to JSON (main command)
    Convert(ConvertArgs),
    /// Parse a catalog file and report statistics without emitting output
    Check(CheckArgs),
}

/// Arguments for the convert command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input catalog file
    ///
    /// Reads from stdin when omitted.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input catalog file (stdin when omitted)"
    )]
    pub input: Option<PathBuf>,

    /// Output file for generated JSON
    ///
    /// Writes to stdout when omitted.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for generated JSON (stdout when omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Shape of the emitted values
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "record",
        help = "Emit resolved product records or raw catalog entries"
    )]
    pub format: EmitFormat,

    /// Emit one JSON object per line
    ///
    /// By default output is a pretty-printed JSON array. This flag switches
    /// to JSON Lines, writing each value as soon as its line is parsed.
    #[arg(long = "compact", help = "Emit JSON Lines instead of a pretty-printed array")]
    pub compact: bool,

    /// Abort on the first malformed line
    ///
    /// By default malformed lines are logged and skipped and every valid
    /// entry is emitted.
    #[arg(long = "strict", help = "Abort on the first malformed line")]
    pub strict: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the check command (parse-only validation)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Input catalog file
    ///
    /// Reads from stdin when omitted.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input catalog file (stdin when omitted)"
    )]
    pub input: Option<PathBuf>,

    /// Abort on the first malformed line
    #[arg(long = "strict", help = "Abort on the first malformed line")]
    pub strict: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output value shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitFormat {
    /// Resolved product records
    Record,
    /// Raw catalog entries
    Entry,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(self.input.as_deref())?;

        // Validate output file directory exists if specified
        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(self.input.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

/// Validate an input path exists and is a file (only if explicitly provided)
fn validate_input(input: Option<&std::path::Path>) -> Result<()> {
    if let Some(input) = input {
        if !input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                input.display()
            )));
        }

        if input.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                input.display()
            )));
        }
    }

    Ok(())
}

/// Map verbosity flags to a log level name
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
