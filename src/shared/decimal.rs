//! Price rounding for chart output.

use rust_decimal::prelude::*;

/// Round a price to 2 decimal places, half away from zero.
///
/// Rounding applies to the exact binary value of `value`, so `1.005` (stored
/// as `1.00499999...`) becomes `1.0`.
///
/// Returns `None` for NaN or infinite input so callers can drop the row.
pub fn round2(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_f64()
}
