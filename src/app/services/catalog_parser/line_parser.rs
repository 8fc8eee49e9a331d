//! Single-line parsing for catalog records
//!
//! This module converts one raw catalog line into a validated
//! [`CatalogEntry`], applying the length check, field extraction, and the
//! single-versus-split price resolution rules.

use super::field_parsers::{flag_set, numeric_field, text_field};
use crate::app::models::{CatalogEntry, EntryPrice, ProductFlags};
use crate::constants::{RECORD_WIDTH, layout};
use crate::{Error, Result};

/// Parse one catalog line into a validated entry
///
/// Any defect (wrong length, a numeric field that is not all digits, a
/// missing regular price, or inconsistent promotional split fields) yields
/// a malformed-record error with the reason. There are no partial results.
pub fn parse_record(line: &str) -> Result<CatalogEntry> {
    if line.len() != RECORD_WIDTH {
        return Err(Error::malformed_record(format!(
            "expected {} characters, got {}",
            RECORD_WIDTH,
            line.len()
        )));
    }

    // The layout is byte-oriented; fields are located by byte offset.
    if !line.is_ascii() {
        return Err(Error::malformed_record(
            "record contains non-ASCII characters",
        ));
    }

    let product_id = numeric_field(line, &layout::PRODUCT_ID)?;

    // Only right-padded per the catalog specification, so trim the end.
    let product_description = text_field(line, &layout::PRODUCT_DESCRIPTION)
        .trim_end()
        .to_string();

    let regular_single = numeric_field(line, &layout::REGULAR_SINGLE)?;
    let promotional_single = numeric_field(line, &layout::PROMOTIONAL_SINGLE)?;
    let regular_split = numeric_field(line, &layout::REGULAR_SPLIT)?;
    let promotional_split = numeric_field(line, &layout::PROMOTIONAL_SPLIT)?;
    let regular_for_x = numeric_field(line, &layout::REGULAR_FOR_X)?;
    let promotional_for_x = numeric_field(line, &layout::PROMOTIONAL_FOR_X)?;

    let flags = ProductFlags {
        per_weight: flag_set(line, layout::PER_WEIGHT_POSITION),
        taxable: flag_set(line, layout::TAXABLE_POSITION),
    };

    let product_size = text_field(line, &layout::PRODUCT_SIZE)
        .trim_end()
        .to_string();

    // A zero in a price field means "not priced this way". A regular price
    // in one of the two forms is mandatory.
    let regular_price = if regular_single != 0 {
        EntryPrice::Single {
            cents: regular_single,
        }
    } else if regular_split != 0 && regular_for_x != 0 {
        EntryPrice::Split {
            combined_cents: regular_split,
            quantity: regular_for_x,
        }
    } else {
        return Err(Error::malformed_record("no regular price present"));
    };

    let promotional_price = if promotional_single != 0 {
        Some(EntryPrice::Single {
            cents: promotional_single,
        })
    } else if promotional_split != 0 && promotional_for_x != 0 {
        Some(EntryPrice::Split {
            combined_cents: promotional_split,
            quantity: promotional_for_x,
        })
    } else if promotional_split == 0 && promotional_for_x == 0 {
        None
    } else {
        // Exactly one of the split fields is populated.
        return Err(Error::malformed_record(
            "promotional split price and quantity must both be set or both be zero",
        ));
    };

    Ok(CatalogEntry {
        product_id,
        product_description,
        regular_price,
        promotional_price,
        flags,
        product_size,
    })
}
