//! Data models for catalog processing
//!
//! This module contains the core data structures for representing parsed
//! catalog entries and the resolved product records derived from them,
//! following the fixed-width product catalog specification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Entry
// =============================================================================

/// One parsed, semantically validated line of the catalog file
///
/// An entry keeps prices in their raw integer-cents encodings. Use the
/// record resolver to obtain display strings and calculation-ready decimal
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogEntry {
    /// 8-digit product identifier
    pub product_id: u32,

    /// Product description with trailing padding removed
    pub product_description: String,

    /// Regular price, always present
    pub regular_price: EntryPrice,

    /// Promotional price, absent when the catalog carries none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotional_price: Option<EntryPrice>,

    /// Decoded product flags
    pub flags: ProductFlags,

    /// Product size with trailing padding removed; may be empty
    pub product_size: String,
}

/// A price at entry level, in minor currency units (cents)
///
/// Exactly one pricing form exists per price: either a flat single price
/// or a split "N for amount" price. Absence of a price is expressed as
/// `Option<EntryPrice>` at the containing field, never as an empty price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum EntryPrice {
    /// Flat price in cents; nonzero by construction
    Single { cents: u32 },

    /// "quantity for combined_cents" pricing; both nonzero by construction
    Split { combined_cents: u32, quantity: u32 },
}

/// Named boolean flags decoded from the record's flag block
///
/// The flag block has nine columns; only these two carry defined meaning
/// for downstream processing. The rest are preserved in the file format
/// but not modeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductFlags {
    /// Product is priced per pound rather than per item
    pub per_weight: bool,

    /// Product is subject to the constant tax rate
    pub taxable: bool,
}

// =============================================================================
// Product Record
// =============================================================================

/// A catalog entry resolved into display/calculation-ready form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductRecord {
    /// 8-digit product identifier
    pub product_id: u32,

    /// Product description with trailing padding removed
    pub product_description: String,

    /// Resolved regular price
    pub regular_price: ResolvedPrice,

    /// Resolved promotional price, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotional_price: Option<ResolvedPrice>,

    /// Unit the product is sold by
    pub unit_of_measure: UnitOfMeasure,

    /// Product size; sometimes an empty string
    pub product_size: String,

    /// Tax rate as a decimal multiplier, not a percentage
    pub tax_rate: Decimal,
}

/// A resolved price: a display string plus a fixed-scale decimal value
/// suitable for arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolvedPrice {
    /// Human-facing representation, e.g. `$5.49` or `2 For $13.00`
    pub display: String,

    /// Per-unit price at scale 4 for downstream calculation
    pub calculator_price: Decimal,
}

/// Unit of measure a product is sold by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum UnitOfMeasure {
    /// Sold per item
    Each,
    /// Sold per pound
    Pound,
}
