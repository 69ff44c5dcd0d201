//! Checked decimal arithmetic and output rounding.
//!
//! Values are carried at full precision through the whole calculation and
//! rounded exactly once, when serialized. Rounding is banker's rounding
//! (`Decimal::round_dp`), emitted as a JSON number.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serializer;

use crate::constants::{CURRENCY_DP, DIVIDEND_DP, ONE_HUNDRED, PERCENT_DP, PRICE_DP, YIELD_DP};
use crate::errors::CalculatorError;

pub fn checked_add(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, CalculatorError> {
    a.checked_add(b).ok_or(CalculatorError::Overflow(what))
}

pub fn checked_sub(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, CalculatorError> {
    a.checked_sub(b).ok_or(CalculatorError::Overflow(what))
}

pub fn checked_mul(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, CalculatorError> {
    a.checked_mul(b).ok_or(CalculatorError::Overflow(what))
}

/// `numerator / denominator * 100`, or zero when the denominator is not
/// strictly positive.
pub fn percent_of(
    numerator: Decimal,
    denominator: Decimal,
    what: &'static str,
) -> Result<Decimal, CalculatorError> {
    if denominator <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let ratio = numerator
        .checked_div(denominator)
        .ok_or(CalculatorError::Overflow(what))?;
    checked_mul(ratio, ONE_HUNDRED, what)
}

/// Round to `dp` places for output. Negative zero collapses to zero.
pub fn round_for_output(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp(dp);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

fn serialize_rounded<S>(value: &Decimal, dp: u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rounded = round_for_output(*value, dp);
    let float = rounded.to_f64().ok_or_else(|| {
        serde::ser::Error::custom(format!("decimal {} is not representable as f64", rounded))
    })?;
    serializer.serialize_f64(float)
}

pub fn serialize_currency<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_rounded(value, CURRENCY_DP, serializer)
}

pub fn serialize_percent<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_rounded(value, PERCENT_DP, serializer)
}

pub fn serialize_yield<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_rounded(value, YIELD_DP, serializer)
}

pub fn serialize_price<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_rounded(value, PRICE_DP, serializer)
}

pub fn serialize_dividend<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_rounded(value, DIVIDEND_DP, serializer)
}
