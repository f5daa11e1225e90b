pub mod engine;
pub mod outcome;

mod energy;
mod food;
mod products;
mod transport;
mod waste;

use rust_decimal::Decimal;

/// Weekly quantity -> annual quantity.
pub(crate) fn annualize_weekly(value: Decimal) -> Decimal {
    value * Decimal::from(52)
}

/// Monthly quantity -> annual quantity.
pub(crate) fn annualize_monthly(value: Decimal) -> Decimal {
    value * Decimal::from(12)
}

/// Daily quantity -> annual quantity.
pub(crate) fn annualize_daily(value: Decimal) -> Decimal {
    value * Decimal::from(365)
}

/// 0-100 percentage -> 0-1 ratio. No clamping; out-of-range inputs pass
/// through arithmetically.
pub(crate) fn percentage_ratio(percentage: Decimal) -> Decimal {
    percentage / Decimal::ONE_HUNDRED
}
