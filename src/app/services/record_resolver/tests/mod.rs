//! Tests for price resolution and record derivation

mod price_tests;
