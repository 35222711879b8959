//! Types and policy constants used throughout the ledger.

/// Decimal precision for monetary values.
/// This is used to convert floating-point values to fixed-point representation.
pub const DECIMAL_PRECISION: f64 = 10000.0;

/// Reserved minimum a savings account keeps after any withdrawal (1000 units).
pub const SAVINGS_MINIMUM_BALANCE: Money = 10_000_000;

/// Flat service charge applied to current account withdrawals (25.5 units).
pub const CURRENT_SERVICE_CHARGE: Money = 255_000;

/// Account ID type, representing a unique identifier for an account.
pub type AccountId = u32;

/// Money type, representing a fixed-point monetary value in units of 1/10000.
/// Amounts finer than 0.0001 cannot be represented and round to the nearest step.
pub type Money = i64;

/// Converts a decimal amount into fixed-point money, rounding to the nearest 0.0001.
/// Values beyond the range of `Money` saturate at `Money::MIN`/`Money::MAX`.
pub fn to_money(value: f64) -> Money {
    (value * DECIMAL_PRECISION).round() as Money
}

/// Converts fixed-point money back into a decimal amount for display.
pub fn from_money(money: Money) -> f64 {
    money as f64 / DECIMAL_PRECISION
}
