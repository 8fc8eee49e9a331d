//! Field extraction utilities for fixed-width catalog records
//!
//! This module provides helper functions for pulling typed fields out of a
//! catalog line using the layout table in [`crate::constants`]. All helpers
//! assume the caller has already validated the line to be exactly
//! [`RECORD_WIDTH`](crate::constants::RECORD_WIDTH) ASCII bytes, which
//! [`parse_record`](super::line_parser::parse_record) enforces.

use crate::constants::{FieldSpan, layout};
use crate::{Error, Result};

/// Extract a raw text field, padding included
pub fn text_field<'a>(line: &'a str, span: &FieldSpan) -> &'a str {
    &line[span.offset..span.end()]
}

/// Parse a fixed-width numeric field as a non-negative integer
///
/// The field must consist of exactly `span.width` ASCII digits; sign
/// characters, spaces, and any other bytes make the record malformed.
pub fn numeric_field(line: &str, span: &FieldSpan) -> Result<u32> {
    let raw = text_field(line, span);

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed_record(format!(
            "{} is not a {}-digit number: {:?}",
            span.name, span.width, raw
        )));
    }

    raw.parse::<u32>().map_err(|_| {
        Error::malformed_record(format!("{} out of range: {:?}", span.name, raw))
    })
}

/// Test whether the flag at the given 1-indexed block position is set
///
/// A flag is set when its column holds exactly `Y`; any other character
/// leaves it clear.
pub fn flag_set(line: &str, position: usize) -> bool {
    line.as_bytes()[layout::flag_offset(position)] == b'Y'
}
