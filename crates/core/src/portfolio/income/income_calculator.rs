use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::errors::CalculatorError;
use crate::utils::decimal_utils::{checked_add, checked_mul, percent_of};
use networth_market_data::DividendEvent;

/// Sum of per-share dividends paid within `window_days` before `as_of`.
///
/// The lower bound is inclusive: an event exactly `window_days` old counts.
/// Events after `as_of` are included as well, since providers report
/// announced dividends ahead of the payment date.
pub fn trailing_dividend_per_share(
    events: &[DividendEvent],
    as_of: DateTime<Utc>,
    window_days: i64,
) -> Result<Decimal, CalculatorError> {
    let cutoff = as_of - Duration::days(window_days);
    events
        .iter()
        .filter(|event| event.timestamp >= cutoff)
        .try_fold(Decimal::ZERO, |sum, event| {
            checked_add(sum, event.amount, "trailing dividends")
        })
}

/// Trailing dividend figures for one holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividendYield {
    pub per_share: Decimal,
    pub total: Decimal,
    pub yield_on_price_pct: Decimal,
    pub yield_on_cost_pct: Decimal,
}

impl DividendYield {
    pub fn zero() -> Self {
        DividendYield {
            per_share: Decimal::ZERO,
            total: Decimal::ZERO,
            yield_on_price_pct: Decimal::ZERO,
            yield_on_cost_pct: Decimal::ZERO,
        }
    }

    /// Yields are zero when the price (or cost) is not strictly positive.
    pub fn calculate(
        per_share: Decimal,
        units: Decimal,
        price: Decimal,
        cost: Decimal,
    ) -> Result<Self, CalculatorError> {
        Ok(DividendYield {
            per_share,
            total: checked_mul(per_share, units, "dividend total")?,
            yield_on_price_pct: percent_of(per_share, price, "dividend yield")?,
            yield_on_cost_pct: percent_of(per_share, cost, "yield on cost")?,
        })
    }
}
