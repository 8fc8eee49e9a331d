//! Run configuration for catalog processing
//!
//! Holds the settings a single processing run operates under. Built from
//! command-line arguments by the CLI layer; library callers can construct
//! it directly.

use serde::{Deserialize, Serialize};

/// Which shape of value a run emits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputLayout {
    /// Resolved product records (prices worked out, flags interpreted)
    #[default]
    Record,
    /// Raw catalog entries as parsed
    Entry,
}

/// Configuration for one processing run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Abort on the first malformed line instead of skipping it
    pub strict: bool,

    /// Shape of the emitted values
    pub layout: OutputLayout,

    /// Emit one JSON object per line instead of a pretty-printed array
    pub compact: bool,
}
