use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{CalculatorError, Result, ValidationError};
use crate::portfolio::holdings::{HoldingInput, HoldingValuation};
use crate::portfolio::loans::{LoanInput, LoanValuation};
use crate::utils::coercion::{CoercionWarning, FieldReader};
use crate::utils::decimal_utils::{
    checked_add, checked_sub, percent_of, serialize_currency, serialize_percent,
};

/// A portfolio payload after coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioRequest {
    pub holdings: Vec<HoldingInput>,
    pub loans: Vec<LoanInput>,
    /// Fields that were replaced by defaults while reading the payload
    pub warnings: Vec<CoercionWarning>,
}

impl PortfolioRequest {
    /// Read `{ "holdings": [...], "loans": [...] }`.
    ///
    /// Absent or null sections are empty. A section that is present but not
    /// a list is rejected; every other problem is absorbed into defaults.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut warnings = Vec::new();

        let holdings = section_rows(value, "holdings")?
            .iter()
            .enumerate()
            .map(|(row, item)| {
                let mut reader = FieldReader::new("holdings", row, item, &mut warnings);
                HoldingInput::from_reader(&mut reader)
            })
            .collect();

        let loans = section_rows(value, "loans")?
            .iter()
            .enumerate()
            .map(|(row, item)| {
                let mut reader = FieldReader::new("loans", row, item, &mut warnings);
                LoanInput::from_reader(&mut reader)
            })
            .collect();

        Ok(PortfolioRequest {
            holdings,
            loans,
            warnings,
        })
    }
}

fn section_rows<'a>(value: &'a Value, key: &str) -> Result<&'a [Value]> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ValidationError::NotAList(key.to_string()).into()),
    }
}

/// Portfolio-wide sums, accumulated in input order.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioTotals {
    #[serde(serialize_with = "serialize_currency")]
    pub total_market_value: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub total_cost: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub total_unrealized_pl: Decimal,
    #[serde(serialize_with = "serialize_percent")]
    pub total_return_pct: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub total_div_ttm: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub total_loan_principal: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub total_monthly_interest: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub total_annual_interest: Decimal,
    /// Market value minus loan principal. Interest is not deducted.
    #[serde(serialize_with = "serialize_currency")]
    pub net_worth: Decimal,
}

impl PortfolioTotals {
    /// Add one holding. On overflow the totals are left untouched.
    pub fn add_holding(&mut self, holding: &HoldingValuation) -> std::result::Result<(), CalculatorError> {
        let market_value =
            checked_add(self.total_market_value, holding.market_value, "total market value")?;
        let cost = checked_add(self.total_cost, holding.cost_total, "total cost")?;
        let div_ttm = checked_add(self.total_div_ttm, holding.div_ttm_total, "total dividends")?;

        self.total_market_value = market_value;
        self.total_cost = cost;
        self.total_div_ttm = div_ttm;
        Ok(())
    }

    /// Add one loan. On overflow the totals are left untouched.
    pub fn add_loan(&mut self, loan: &LoanValuation) -> std::result::Result<(), CalculatorError> {
        let principal = checked_add(
            self.total_loan_principal,
            loan.input.principal,
            "total loan principal",
        )?;
        let monthly = checked_add(
            self.total_monthly_interest,
            loan.monthly_interest,
            "total monthly interest",
        )?;
        let annual = checked_add(
            self.total_annual_interest,
            loan.annual_interest,
            "total annual interest",
        )?;

        self.total_loan_principal = principal;
        self.total_monthly_interest = monthly;
        self.total_annual_interest = annual;
        Ok(())
    }

    /// Derive the figures that depend on the completed sums.
    pub fn finalize(&mut self) -> std::result::Result<(), CalculatorError> {
        self.total_unrealized_pl =
            checked_sub(self.total_market_value, self.total_cost, "total unrealized P&L")?;
        self.total_return_pct =
            percent_of(self.total_unrealized_pl, self.total_cost, "total return percentage")?;
        self.net_worth =
            checked_sub(self.total_market_value, self.total_loan_principal, "net worth")?;
        Ok(())
    }
}

/// Response for a valued portfolio.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PortfolioValuation {
    pub invest: Vec<HoldingValuation>,
    pub totals: PortfolioTotals,
    pub loans: Vec<LoanValuation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<CoercionWarning>,
    pub as_of: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::portfolio::holdings::{AssetType, Unit};
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_both_sections() {
        let request = PortfolioRequest::from_value(&json!({
            "holdings": [
                { "symbol": "AAA", "unit": "lots", "qty": 2, "cost": 10 },
                { "symbol": "F1", "asset_type": "fund", "qty": "3.5" }
            ],
            "loans": [{ "name": "mortgage", "principal": 1000000, "rate": 2.4 }]
        }))
        .unwrap();

        assert_eq!(request.holdings.len(), 2);
        assert_eq!(request.holdings[0].unit, Unit::Lots);
        assert_eq!(request.holdings[1].asset_type, AssetType::Fund);
        assert_eq!(request.holdings[1].qty, dec!(3.5));
        assert_eq!(request.loans[0].principal, dec!(1000000));
        assert!(request.warnings.is_empty());
    }

    #[test]
    fn test_from_value_absent_and_null_sections_are_empty() {
        let empty = PortfolioRequest::from_value(&json!({})).unwrap();
        assert!(empty.holdings.is_empty() && empty.loans.is_empty());

        let nulls = PortfolioRequest::from_value(&json!({ "holdings": null, "loans": null })).unwrap();
        assert_eq!(nulls, PortfolioRequest::default());

        let not_an_object = PortfolioRequest::from_value(&json!([1, 2, 3])).unwrap();
        assert!(not_an_object.holdings.is_empty());
    }

    #[test]
    fn test_from_value_rejects_non_list_section() {
        let result = PortfolioRequest::from_value(&json!({ "holdings": { "symbol": "AAA" } }));
        match result {
            Err(Error::Validation(ValidationError::NotAList(field))) => assert_eq!(field, "holdings"),
            other => panic!("expected NotAList, got {:?}", other),
        }

        assert!(PortfolioRequest::from_value(&json!({ "loans": "none" })).is_err());
    }

    #[test]
    fn test_from_value_collects_warnings_with_row_positions() {
        let request = PortfolioRequest::from_value(&json!({
            "holdings": [{ "symbol": "AAA" }, "junk", { "symbol": "BBB", "qty": "many" }],
            "loans": [{ "name": "car", "rate": [] }]
        }))
        .unwrap();

        assert_eq!(request.holdings.len(), 3);
        assert_eq!(request.holdings[1].symbol, "");
        let positions: Vec<(&str, usize, &str)> = request
            .warnings
            .iter()
            .map(|w| (w.section, w.row, w.field.as_str()))
            .collect();
        assert_eq!(
            positions,
            vec![("holdings", 1, ""), ("holdings", 2, "qty"), ("loans", 0, "rate")]
        );
    }

    #[test]
    fn test_totals_finalize() {
        let mut totals = PortfolioTotals {
            total_market_value: dec!(1500),
            total_cost: dec!(1000),
            total_loan_principal: dec!(1000000),
            ..Default::default()
        };
        totals.finalize().unwrap();

        assert_eq!(totals.total_unrealized_pl, dec!(500));
        assert_eq!(totals.total_return_pct, dec!(50));
        assert_eq!(totals.net_worth, dec!(-998500));
    }

    #[test]
    fn test_totals_zero_cost_has_zero_return() {
        let mut totals = PortfolioTotals {
            total_market_value: dec!(250),
            ..Default::default()
        };
        totals.finalize().unwrap();
        assert_eq!(totals.total_return_pct, Decimal::ZERO);
        assert_eq!(totals.net_worth, dec!(250));
    }

    #[test]
    fn test_add_loan_overflow_leaves_totals_untouched() {
        let mut totals = PortfolioTotals {
            total_loan_principal: dec!(100),
            total_monthly_interest: Decimal::MAX,
            ..Default::default()
        };
        let loan = LoanValuation {
            input: LoanInput {
                name: "car".to_string(),
                principal: dec!(50),
                rate: dec!(6),
            },
            monthly_interest: dec!(1),
            annual_interest: dec!(12),
        };

        let err = totals.add_loan(&loan).unwrap_err();
        assert_eq!(err, CalculatorError::Overflow("total monthly interest"));
        assert_eq!(totals.total_loan_principal, dec!(100));
        assert_eq!(totals.total_annual_interest, Decimal::ZERO);
    }
}
