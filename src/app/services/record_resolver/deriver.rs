//! Derivation of product records from catalog entries
//!
//! Combines flag interpretation with price resolution to build the final
//! display/calculation-ready record. Pure function of the entry; no state.

use rust_decimal::Decimal;

use super::price;
use crate::Result;
use crate::app::models::{CatalogEntry, ProductRecord, UnitOfMeasure};
use crate::constants::tax;

/// Derive a product record from a catalog entry
///
/// Per-weight products are sold by the pound, everything else per item.
/// Taxable products carry the constant tax rate multiplier; all others a
/// tax rate of zero. A single fixed tax rate is assumed.
pub fn derive(entry: &CatalogEntry) -> Result<ProductRecord> {
    let unit_of_measure = if entry.flags.per_weight {
        UnitOfMeasure::Pound
    } else {
        UnitOfMeasure::Each
    };

    let tax_rate = if entry.flags.taxable {
        Decimal::new(tax::RATE_MANTISSA, tax::RATE_SCALE)
    } else {
        Decimal::ZERO
    };

    Ok(ProductRecord {
        product_id: entry.product_id,
        product_description: entry.product_description.clone(),
        regular_price: price::resolve(&entry.regular_price)?,
        promotional_price: entry
            .promotional_price
            .as_ref()
            .map(price::resolve)
            .transpose()?,
        unit_of_measure,
        product_size: entry.product_size.clone(),
        tax_rate,
    })
}
