//! Whole-unit amounts and exact ratio arithmetic
//!
//! Balances, premiums and payouts are integers in a single implicit currency.
//! Business thresholds ("at least 70% of the vehicle value") are expressed as
//! `rust_decimal` ratios so that comparisons never go through floating point.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// An amount in whole currency units. Negative balances represent credit.
pub type Amount = i64;

/// Errors that can occur during amount calculations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid ratio: {0}")]
    InvalidRatio(Decimal),

    #[error("Overflow during calculation")]
    Overflow,
}

/// Requires a strictly positive amount
///
/// # Arguments
///
/// * `amount` - The amount to check
/// * `what` - Name used in the error message
pub fn ensure_positive(amount: Amount, what: &str) -> Result<Amount, MoneyError> {
    if amount <= 0 {
        return Err(MoneyError::InvalidAmount(format!(
            "{} must be positive, got {}",
            what, amount
        )));
    }
    Ok(amount)
}

/// Requires a non-negative amount
pub fn ensure_non_negative(amount: Amount, what: &str) -> Result<Amount, MoneyError> {
    if amount < 0 {
        return Err(MoneyError::InvalidAmount(format!(
            "{} must be non-negative, got {}",
            what, amount
        )));
    }
    Ok(amount)
}

/// Returns `base * ratio` as an exact decimal
pub fn scaled(base: Amount, ratio: Decimal) -> Result<Decimal, MoneyError> {
    Decimal::from(base)
        .checked_mul(ratio)
        .ok_or(MoneyError::Overflow)
}

/// Returns `base * ratio` truncated toward zero to whole units
///
/// # Example
///
/// ```
/// use core_kernel::money::scaled_truncated;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(scaled_truncated(15_001, dec!(0.5)).unwrap(), 7_500);
/// ```
pub fn scaled_truncated(base: Amount, ratio: Decimal) -> Result<Amount, MoneyError> {
    scaled(base, ratio)?
        .trunc()
        .to_i64()
        .ok_or(MoneyError::Overflow)
}

/// Returns true if `amount >= base * ratio`
///
/// # Example
///
/// ```
/// use core_kernel::money::meets_ratio;
/// use rust_decimal_macros::dec;
///
/// assert!(meets_ratio(10_500, 15_000, dec!(0.7)).unwrap());
/// assert!(!meets_ratio(10_499, 15_000, dec!(0.7)).unwrap());
/// ```
pub fn meets_ratio(amount: Amount, base: Amount, ratio: Decimal) -> Result<bool, MoneyError> {
    Ok(Decimal::from(amount) >= scaled(base, ratio)?)
}

/// Validates a ratio lies in `[0, 1]`
pub fn ensure_unit_ratio(ratio: Decimal) -> Result<Decimal, MoneyError> {
    if ratio.is_sign_negative() || ratio > Decimal::ONE {
        return Err(MoneyError::InvalidRatio(ratio));
    }
    Ok(ratio)
}
