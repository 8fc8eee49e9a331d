//! Tests for price resolution
//!
//! The split-price cases pin the round-half-down behavior: an exact
//! midpoint beyond the fourth decimal place rounds toward zero, anything
//! above it rounds away as usual.

use rust_decimal::Decimal;

use crate::app::models::EntryPrice;
use crate::app::services::record_resolver::resolve;
use crate::Error;

#[test]
fn test_single_price_resolves_exactly() {
    let resolved = resolve(&EntryPrice::Single { cents: 349 }).unwrap();

    assert_eq!(resolved.display, "$3.49");
    assert_eq!(resolved.calculator_price, Decimal::new(34900, 4));
    assert_eq!(resolved.calculator_price.to_string(), "3.4900");
}

#[test]
fn test_whole_dollar_single_price_keeps_cents_digits() {
    let resolved = resolve(&EntryPrice::Single { cents: 1000 }).unwrap();

    assert_eq!(resolved.display, "$10.00");
    assert_eq!(resolved.calculator_price.to_string(), "10.0000");
}

#[test]
fn test_split_price_divides_per_unit() {
    let resolved = resolve(&EntryPrice::Split {
        combined_cents: 1300,
        quantity: 2,
    })
    .unwrap();

    assert_eq!(resolved.display, "2 For $13.00");
    assert_eq!(resolved.calculator_price.to_string(), "6.5000");
}

#[test]
fn test_tiny_split_price_resolves_exactly() {
    let resolved = resolve(&EntryPrice::Split {
        combined_cents: 100,
        quantity: 10000,
    })
    .unwrap();

    assert_eq!(resolved.display, "10000 For $1.00");
    assert_eq!(resolved.calculator_price, Decimal::new(1, 4));
    assert_eq!(resolved.calculator_price.to_string(), "0.0001");
}

#[test]
fn test_split_price_midpoint_rounds_down() {
    // 10.01 / 200 = 0.05005 exactly: the digit past the fourth place is a
    // bare 5, so the result rounds down to 0.0500
    let resolved = resolve(&EntryPrice::Split {
        combined_cents: 1001,
        quantity: 200,
    })
    .unwrap();

    assert_eq!(resolved.display, "200 For $10.01");
    assert_eq!(resolved.calculator_price.to_string(), "0.0500");
}

#[test]
fn test_split_price_above_midpoint_rounds_up() {
    // 10.01 / 75 = 0.1334666...: not a midpoint, so ordinary rounding
    // takes it up to 0.1335
    let resolved = resolve(&EntryPrice::Split {
        combined_cents: 1001,
        quantity: 75,
    })
    .unwrap();

    assert_eq!(resolved.display, "75 For $10.01");
    assert_eq!(resolved.calculator_price.to_string(), "0.1335");
}

#[test]
fn test_zero_quantity_split_is_rejected() {
    let err = resolve(&EntryPrice::Split {
        combined_cents: 100,
        quantity: 0,
    })
    .unwrap_err();

    assert!(matches!(err, Error::InvalidPrice { .. }));
}
