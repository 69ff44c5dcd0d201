use rust_decimal::Decimal;

use crate::constants::{MONTHS_PER_YEAR, ONE_HUNDRED};
use crate::errors::CalculatorError;
use crate::utils::decimal_utils::checked_mul;

/// Simple (non-compounding) interest on a loan balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanInterest {
    pub monthly: Decimal,
    /// `monthly * 12`
    pub annual: Decimal,
}

impl LoanInterest {
    pub fn calculate(principal: Decimal, annual_rate_pct: Decimal) -> Result<Self, CalculatorError> {
        let yearly = checked_mul(principal, annual_rate_pct, "loan interest")? / ONE_HUNDRED;
        let monthly = yearly / MONTHS_PER_YEAR;
        let annual = checked_mul(monthly, MONTHS_PER_YEAR, "annual interest")?;
        Ok(LoanInterest { monthly, annual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::loans::{LoanInput, LoanValuation};
    use crate::utils::coercion::FieldReader;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_mortgage_interest() {
        let interest = LoanInterest::calculate(dec!(1200000), dec!(3.0)).unwrap();
        assert_eq!(interest.monthly, dec!(3000));
        assert_eq!(interest.annual, dec!(36000));
    }

    #[test]
    fn test_zero_rate_or_principal() {
        assert_eq!(
            LoanInterest::calculate(dec!(500000), Decimal::ZERO).unwrap().monthly,
            Decimal::ZERO
        );
        assert_eq!(
            LoanInterest::calculate(Decimal::ZERO, dec!(2.5)).unwrap().annual,
            Decimal::ZERO
        );
    }

    #[test]
    fn test_annual_is_twelve_months_of_simple_interest() {
        let interest = LoanInterest::calculate(dec!(1000), dec!(1)).unwrap();
        assert_eq!(interest.annual.round_dp(10), dec!(10));
        assert!(interest.monthly > dec!(0.8333) && interest.monthly < dec!(0.8334));
    }

    #[test]
    fn test_loan_row_coercion_and_output() {
        let row = json!({ "name": " Mortgage ", "principal": "1000000", "rate": 2.4 });
        let mut warnings = Vec::new();
        let input = {
            let mut reader = FieldReader::new("loans", 0, &row, &mut warnings);
            LoanInput::from_reader(&mut reader)
        };
        assert!(warnings.is_empty());

        let interest = LoanInterest::calculate(input.principal, input.rate).unwrap();
        let valuation = LoanValuation {
            input,
            monthly_interest: interest.monthly,
            annual_interest: interest.annual,
        };
        let json = serde_json::to_value(&valuation).unwrap();

        assert_eq!(json["name"], "Mortgage");
        assert_eq!(json["principal"].as_f64().unwrap(), 1_000_000.0);
        assert_eq!(json["monthly_interest"].as_f64().unwrap(), 2000.0);
        assert_eq!(json["annual_interest"].as_f64().unwrap(), 24000.0);
    }
}
