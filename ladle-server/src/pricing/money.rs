//! Money conversion helpers
//!
//! All monetary arithmetic runs on `Decimal`; values convert to `f64`
//! only at the storage/serialization edge, rounded to 2 decimal places
//! half-up.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Inputs are validated as finite at the API boundary. If NaN/Infinity
/// somehow reaches here, logs an error and returns ZERO rather than
/// corrupting a financial calculation.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}
