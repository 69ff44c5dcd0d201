use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{CalculatorError, Result, ValidationError};
use crate::portfolio::holdings::PositionValue;
use crate::portfolio::loans::LoanInterest;
use crate::utils::coercion::coerce_decimal;
use crate::utils::decimal_utils::{checked_add, checked_sub, serialize_currency};
use networth_market_data::DividendEvent;

/// A single position with a loan against it. Every field is required.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSummaryRequest {
    pub symbol: String,
    pub shares: Decimal,
    pub cost_price: Decimal,
    pub loan_amount: Decimal,
    /// Annual rate in percent
    pub loan_rate: Decimal,
}

impl PositionSummaryRequest {
    /// Strict parse: a missing field or a value that is not a number is a
    /// validation error.
    pub fn from_value(value: &Value) -> Result<Self> {
        let symbol = match required(value, "symbol")? {
            Value::String(text) => text.trim().to_string(),
            other => other.to_string(),
        };

        Ok(PositionSummaryRequest {
            symbol,
            shares: required_decimal(value, "shares")?,
            cost_price: required_decimal(value, "cost_price")?,
            loan_amount: required_decimal(value, "loan_amount")?,
            loan_rate: required_decimal(value, "loan_rate")?,
        })
    }
}

fn required<'a>(value: &'a Value, field: &str) -> Result<&'a Value> {
    match value.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field.to_string()).into()),
        Some(found) => Ok(found),
    }
}

fn required_decimal(value: &Value, field: &str) -> Result<Decimal> {
    let raw = required(value, field)?;
    coerce_decimal(raw).ok_or_else(|| {
        ValidationError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        }
        .into()
    })
}

/// Result of the single-position calculator. All values are rounded to
/// two decimals on output.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PositionSummary {
    #[serde(serialize_with = "serialize_currency")]
    pub current_price: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub total_cost: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub market_value: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub unrealized_profit: Decimal,
    /// Lifetime dividends per share, no trailing window
    #[serde(serialize_with = "serialize_currency")]
    pub total_dividends: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub monthly_interest: Decimal,
    /// Market value minus the loan amount
    #[serde(serialize_with = "serialize_currency")]
    pub net_value: Decimal,
}

impl PositionSummary {
    pub fn calculate(
        request: &PositionSummaryRequest,
        current_price: Decimal,
        dividends: &[DividendEvent],
    ) -> std::result::Result<Self, CalculatorError> {
        let position = PositionValue::calculate(request.shares, request.cost_price, current_price)?;
        let total_dividends = dividends.iter().try_fold(Decimal::ZERO, |sum, event| {
            checked_add(sum, event.amount, "lifetime dividends")
        })?;
        let interest = LoanInterest::calculate(request.loan_amount, request.loan_rate)?;

        Ok(PositionSummary {
            current_price,
            total_cost: position.cost_total,
            market_value: position.market_value,
            unrealized_profit: position.unrealized_pl,
            total_dividends,
            monthly_interest: interest.monthly,
            net_value: checked_sub(position.market_value, request.loan_amount, "net value")?,
        })
    }
}
