//! Currency helpers shared by the premium calculations.
//!
//! Money arithmetic saturates at `Decimal::MAX` instead of panicking, so an
//! absurd wage yields an absurd but well-formed amount.

use rust_decimal::{Decimal, RoundingStrategy};

/// Pay for `minutes` at `hourly`, at full precision.
///
/// ```
/// use shift_payroll::calculation::pay_for_minutes;
/// use rust_decimal::Decimal;
///
/// assert_eq!(pay_for_minutes(Decimal::new(1200, 0), 90), Decimal::new(1800, 0));
/// ```
pub fn pay_for_minutes(hourly: Decimal, minutes: i64) -> Decimal {
    let minutes = Decimal::from(minutes);
    match hourly.checked_mul(minutes) {
        Some(product) => product / Decimal::from(60),
        // Divide first so only an unrepresentable result saturates
        None => (hourly / Decimal::from(60)).saturating_mul(minutes),
    }
}

/// Applies a premium rate to a base amount, saturating on overflow.
///
/// ```
/// use shift_payroll::calculation::apply_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(apply_rate(Decimal::new(1000, 0), Decimal::new(25, 2)), Decimal::new(250, 0));
/// assert_eq!(apply_rate(Decimal::MAX, Decimal::new(2, 0)), Decimal::MAX);
/// ```
pub fn apply_rate(amount: Decimal, rate: Decimal) -> Decimal {
    amount.saturating_mul(rate)
}

/// Sums amounts, saturating on overflow.
pub fn sum_amounts<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
}

/// Rounds to whole currency units, halves away from zero.
///
/// ```
/// use shift_payroll::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(25, 1)), Decimal::new(3, 0));
/// assert_eq!(round_currency(Decimal::new(24, 1)), Decimal::new(2, 0));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
