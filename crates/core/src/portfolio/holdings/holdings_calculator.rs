use rust_decimal::Decimal;

use super::holdings_model::{AssetType, Unit};
use crate::errors::CalculatorError;
use crate::utils::decimal_utils::{checked_mul, checked_sub, percent_of};

/// Convert a quantity to a share (or fund unit) count.
///
/// Only stocks quoted in lots are scaled; funds ignore `unit`. The result is
/// exact and the sign of `qty` is kept.
pub fn normalize_units(
    asset_type: AssetType,
    unit: Unit,
    qty: Decimal,
    lot_size: Decimal,
) -> Result<Decimal, CalculatorError> {
    match (asset_type, unit) {
        (AssetType::Stock, Unit::Lots) => checked_mul(qty, lot_size, "lot conversion"),
        _ => Ok(qty),
    }
}

/// Cost, market value and unrealized P&L for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionValue {
    pub cost_total: Decimal,
    pub market_value: Decimal,
    pub unrealized_pl: Decimal,
    /// Zero when `cost_total <= 0`
    pub return_pct: Decimal,
}

impl PositionValue {
    pub fn calculate(units: Decimal, cost: Decimal, price: Decimal) -> Result<Self, CalculatorError> {
        let cost_total = checked_mul(units, cost, "cost total")?;
        let market_value = checked_mul(units, price, "market value")?;
        let unrealized_pl = checked_sub(market_value, cost_total, "unrealized P&L")?;
        let return_pct = percent_of(unrealized_pl, cost_total, "return percentage")?;

        Ok(PositionValue {
            cost_total,
            market_value,
            unrealized_pl,
            return_pct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LOT_SIZE;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lots_and_shares_describe_the_same_position() {
        let from_lots = normalize_units(AssetType::Stock, Unit::Lots, dec!(2), LOT_SIZE).unwrap();
        let from_shares =
            normalize_units(AssetType::Stock, Unit::Shares, dec!(2000), LOT_SIZE).unwrap();
        assert_eq!(from_lots, dec!(2000));
        assert_eq!(from_lots, from_shares);
    }

    #[test]
    fn test_fractional_lots_are_exact() {
        let units = normalize_units(AssetType::Stock, Unit::Lots, dec!(0.333), LOT_SIZE).unwrap();
        assert_eq!(units, dec!(333));
    }

    #[test]
    fn test_funds_ignore_lot_unit() {
        let units = normalize_units(AssetType::Fund, Unit::Lots, dec!(12.5), LOT_SIZE).unwrap();
        assert_eq!(units, dec!(12.5));
    }

    #[test]
    fn test_negative_quantity_passes_through() {
        let units = normalize_units(AssetType::Stock, Unit::Lots, dec!(-1), LOT_SIZE).unwrap();
        assert_eq!(units, dec!(-1000));
    }

    #[test]
    fn test_position_value_gain() {
        let value = PositionValue::calculate(dec!(100), dec!(10), dec!(15)).unwrap();
        assert_eq!(value.cost_total, dec!(1000));
        assert_eq!(value.market_value, dec!(1500));
        assert_eq!(value.unrealized_pl, dec!(500));
        assert_eq!(value.return_pct, dec!(50));
    }

    #[test]
    fn test_position_value_zero_cost_has_zero_return() {
        let free_shares = PositionValue::calculate(dec!(100), dec!(0), dec!(15)).unwrap();
        assert_eq!(free_shares.unrealized_pl, dec!(1500));
        assert_eq!(free_shares.return_pct, Decimal::ZERO);

        let empty = PositionValue::calculate(dec!(0), dec!(10), dec!(15)).unwrap();
        assert_eq!(empty.market_value, Decimal::ZERO);
        assert_eq!(empty.return_pct, Decimal::ZERO);
    }

    #[test]
    fn test_position_value_unpriced_is_full_loss() {
        let value = PositionValue::calculate(dec!(10), dec!(20), Decimal::ZERO).unwrap();
        assert_eq!(value.unrealized_pl, dec!(-200));
        assert_eq!(value.return_pct, dec!(-100));
    }

    #[test]
    fn test_position_value_overflow() {
        let result = PositionValue::calculate(Decimal::MAX, dec!(2), dec!(1));
        assert_eq!(result, Err(CalculatorError::Overflow("cost total")));
    }
}
