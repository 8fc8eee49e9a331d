//! Test fixtures for catalog parser testing
//!
//! This module provides the sample catalog lines and expected entries used
//! across the parser test modules, plus a builder that lays fields out at
//! the exact columns the format prescribes.

use crate::app::models::{CatalogEntry, EntryPrice, ProductFlags};


/// Build a 142-character catalog line from its fields
///
/// `flags` must be the full nine-character flag block; `size` is
/// right-aligned into its field the way the sample catalogs pad it.
#[allow(clippy::too_many_arguments)]
pub fn catalog_line(
    product_id: u32,
    description: &str,
    regular_single: u32,
    promotional_single: u32,
    regular_split: u32,
    promotional_split: u32,
    regular_for_x: u32,
    promotional_for_x: u32,
    flags: &str,
    size: &str,
) -> String {
    assert_eq!(flags.len(), 9, "flag block must be nine characters");
    let line = format!(
        "{:08} {:<59} {:08} {:08} {:08} {:08} {:08} {:08} {} {:>9}",
        product_id,
        description,
        regular_single,
        promotional_single,
        regular_split,
        promotional_split,
        regular_for_x,
        promotional_for_x,
        flags,
        size
    );
    assert_eq!(line.len(), 142, "built line must be record width");
    line
}

pub fn kimchi_line() -> String {
    catalog_line(
        80000001,
        "Kimchi-flavored white rice",
        567,
        0,
        0,
        0,
        0,
        0,
        "NNNNNNNNN",
        "18oz",
    )
}

pub fn soda_line() -> String {
    catalog_line(
        14963801,
        "Generic Soda 12-pack",
        0,
        549,
        1300,
        0,
        2,
        0,
        "NNNNYNNNN",
        "12x12oz",
    )
}

pub fn cigarette_line() -> String {
    catalog_line(
        40123401,
        "Marlboro Cigarettes",
        1000,
        549,
        0,
        0,
        0,
        0,
        "YNNNNNNNN",
        "",
    )
}

pub fn apple_line() -> String {
    catalog_line(
        50133333,
        "Fuji Apples (Organic)",
        349,
        0,
        0,
        0,
        0,
        0,
        "NNYNNNNNN",
        "lb",
    )
}

/// A line with no price in any field, which can never form an entry
pub fn bad_line() -> String {
    catalog_line(14963801, "NoPrice", 0, 0, 0, 0, 0, 0, "XXXXXXXXX", "55")
}

/// Four valid records in known order
pub fn sample_catalog() -> String {
    [kimchi_line(), soda_line(), cigarette_line(), apple_line()].join("\n")
}

/// The sample catalog with an unparseable third line
pub fn bad_catalog() -> String {
    [
        kimchi_line(),
        soda_line(),
        bad_line(),
        cigarette_line(),
        apple_line(),
    ]
    .join("\n")
}

pub fn kimchi_entry() -> CatalogEntry {
    CatalogEntry {
        product_id: 80000001,
        product_description: "Kimchi-flavored white rice".to_string(),
        regular_price: EntryPrice::Single { cents: 567 },
        promotional_price: None,
        flags: ProductFlags::default(),
        product_size: "     18oz".to_string(),
    }
}

pub fn soda_entry() -> CatalogEntry {
    CatalogEntry {
        product_id: 14963801,
        product_description: "Generic Soda 12-pack".to_string(),
        regular_price: EntryPrice::Split {
            combined_cents: 1300,
            quantity: 2,
        },
        promotional_price: Some(EntryPrice::Single { cents: 549 }),
        flags: ProductFlags {
            per_weight: false,
            taxable: true,
        },
        product_size: "  12x12oz".to_string(),
    }
}

pub fn cigarette_entry() -> CatalogEntry {
    CatalogEntry {
        product_id: 40123401,
        product_description: "Marlboro Cigarettes".to_string(),
        regular_price: EntryPrice::Single { cents: 1000 },
        promotional_price: Some(EntryPrice::Single { cents: 549 }),
        flags: ProductFlags::default(),
        product_size: String::new(),
    }
}

pub fn apple_entry() -> CatalogEntry {
    CatalogEntry {
        product_id: 50133333,
        product_description: "Fuji Apples (Organic)".to_string(),
        regular_price: EntryPrice::Single { cents: 349 },
        promotional_price: None,
        flags: ProductFlags {
            per_weight: true,
            taxable: false,
        },
        product_size: "       lb".to_string(),
    }
}
