//! Price resolution from entry-level encodings
//!
//! Converts raw integer-cents price encodings into a display string plus a
//! fixed-scale decimal value suitable for arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::app::models::{EntryPrice, ResolvedPrice};
use crate::{Error, Result};

/// Decimal scale of every calculator price
const CALCULATOR_SCALE: u32 = 4;

/// Resolve an entry-level price into display and calculation form
///
/// Single prices resolve exactly: the cents value at 2 decimal places,
/// re-expressed at scale 4. Split prices divide the combined price by the
/// quantity received, rounded to 4 decimal places with half-down
/// tie-breaking: a digit beyond the 4th place that is exactly 5 with
/// nothing after it rounds toward zero, not up.
///
/// The only failure is a split price whose quantity is zero, which the
/// parser never produces; it is reported as an invalid-price error rather
/// than reaching the division.
pub fn resolve(price: &EntryPrice) -> Result<ResolvedPrice> {
    match *price {
        EntryPrice::Single { cents } => {
            let amount = Decimal::new(i64::from(cents), 2);

            let mut calculator_price = amount;
            calculator_price.rescale(CALCULATOR_SCALE);

            Ok(ResolvedPrice {
                display: format!("${}", amount),
                calculator_price,
            })
        }
        EntryPrice::Split {
            combined_cents,
            quantity,
        } => {
            if quantity == 0 {
                return Err(Error::invalid_price("split price with zero quantity"));
            }

            let combined = Decimal::new(i64::from(combined_cents), 2);

            let mut calculator_price = (combined / Decimal::from(quantity))
                .round_dp_with_strategy(CALCULATOR_SCALE, RoundingStrategy::MidpointTowardZero);
            calculator_price.rescale(CALCULATOR_SCALE);

            Ok(ResolvedPrice {
                display: format!("{} For ${}", quantity, combined),
                calculator_price,
            })
        }
    }
}
