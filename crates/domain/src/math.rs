//! Rounding and weighting helpers shared by the pipeline stages.

use rust_decimal::{Decimal, RoundingStrategy};

/// One hundred, the percentage base.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds half away from zero to `dp` decimal places.
#[must_use]
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Truncates towards zero to `dp` decimal places.
///
/// Used for values that must never exceed an upper bound after rounding.
#[must_use]
pub fn truncate_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::ToZero)
}

/// Truncates a monetary amount to whole cents.
#[must_use]
pub fn floor_cents(value: Decimal) -> Decimal {
    truncate_to(value, 2)
}

/// Converts a percentage (0–100) into a weight (0–1).
#[must_use]
pub fn weight(percentage: Decimal) -> Decimal {
    percentage / HUNDRED
}

/// Divides, returning zero when the denominator is zero.
#[must_use]
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// Arithmetic mean of the values, zero for an empty input.
#[must_use]
pub fn mean<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    let (sum, count) = values
        .into_iter()
        .fold((Decimal::ZERO, 0u32), |(sum, count), v| (sum + v, count + 1));
    safe_div(sum, Decimal::from(count))
}
