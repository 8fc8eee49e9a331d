//! Catalog Processor Library
//!
//! A Rust library for converting fixed-width retail product catalog files
//! into structured catalog entries and resolved product records.
//!
//! This library provides tools for:
//! - Parsing 142-character fixed-width catalog lines with a centralized
//!   field layout table
//! - Lazy, single-pass traversal of a catalog with per-line error
//!   reporting and skip-and-continue recovery
//! - Resolving single and split price encodings into display strings and
//!   fixed-scale decimal values (round-half-down split division)
//! - Deriving display/calculation-ready product records from entries

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_parser;
        pub mod record_resolver;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    CatalogEntry, EntryPrice, ProductFlags, ProductRecord, ResolvedPrice, UnitOfMeasure,
};
pub use app::services::catalog_parser::{
    CatalogReader, ErrorSink, LoggingSink, ParseResult, ParseStats, read_entries, read_records,
};
pub use config::RunConfig;

/// Result type alias for the catalog processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A catalog line that does not form a valid entry
    #[error("malformed catalog record: {reason}")]
    MalformedRecord { reason: String },

    /// A price value violating the resolver contract reached resolution
    #[error("invalid price: {reason}")]
    InvalidPrice { reason: String },

    /// Strict-mode traversal aborted by the error sink
    #[error("failed to parse line {line_number}")]
    ParseAborted { line_number: u64 },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization error
    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }

    /// Create an invalid price error
    pub fn invalid_price(reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            reason: reason.into(),
        }
    }

    /// Create a parse aborted error for the given 1-based line number
    pub fn parse_aborted(line_number: u64) -> Self {
        Self::ParseAborted { line_number }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
