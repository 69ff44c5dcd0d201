#[cfg(test)]
mod tests {
    use crate::portfolio::holdings::holdings_model::{
        AssetType, HoldingInput, HoldingValuation, NavMode, Unit,
    };
    use crate::quotes::PriceSource;
    use crate::utils::coercion::{CoercionWarning, FieldReader};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};

    fn read_holding(row: Value) -> (HoldingInput, Vec<CoercionWarning>) {
        let mut warnings = Vec::new();
        let input = {
            let mut reader = FieldReader::new("holdings", 0, &row, &mut warnings);
            HoldingInput::from_reader(&mut reader)
        };
        (input, warnings)
    }

    #[test]
    fn test_enum_parsing_is_case_insensitive() {
        assert_eq!(" Fund ".parse::<AssetType>(), Ok(AssetType::Fund));
        assert_eq!("LOTS".parse::<Unit>(), Ok(Unit::Lots));
        assert_eq!("Manual".parse::<NavMode>(), Ok(NavMode::Manual));
        assert!("bond".parse::<AssetType>().is_err());
        assert_eq!(Unit::Lots.to_string(), "lots");
    }

    #[test]
    fn test_from_reader_applies_defaults() {
        let (input, warnings) = read_holding(json!({ "symbol": "  2330.TW " }));

        assert_eq!(input.symbol, "2330.TW");
        assert_eq!(input.name, "");
        assert_eq!(input.asset_type, AssetType::Stock);
        assert_eq!(input.unit, Unit::Shares);
        assert_eq!(input.nav_mode, NavMode::Auto);
        assert_eq!(input.qty, Decimal::ZERO);
        assert_eq!(input.cost, Decimal::ZERO);
        assert_eq!(input.manual_nav, Decimal::ZERO);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_from_reader_coerces_bad_fields_with_warnings() {
        let (input, warnings) = read_holding(json!({
            "symbol": "AAA",
            "asset_type": "bond",
            "unit": "lots",
            "qty": "2",
            "cost": "cheap",
            "manual_nav": null,
        }));

        assert_eq!(input.asset_type, AssetType::Stock);
        assert_eq!(input.unit, Unit::Lots);
        assert_eq!(input.qty, dec!(2));
        assert_eq!(input.cost, Decimal::ZERO);
        assert_eq!(input.manual_nav, Decimal::ZERO);

        let fields: Vec<&str> = warnings.iter().map(|w| w.field.as_str()).collect();
        assert_eq!(fields, vec!["asset_type", "cost"]);
    }

    #[test]
    fn test_manual_nav_only_applies_to_funds() {
        let (fund, _) = read_holding(json!({
            "symbol": "F1", "asset_type": "fund", "nav_mode": "manual", "manual_nav": 10.5
        }));
        assert!(fund.uses_manual_nav());
        assert!(!fund.tracks_dividends());

        let (stock, _) = read_holding(json!({ "symbol": "S1", "nav_mode": "manual" }));
        assert!(!stock.uses_manual_nav());
        assert!(stock.tracks_dividends());
    }

    #[test]
    fn test_valuation_serializes_flat_and_rounded() {
        let (input, _) = read_holding(json!({
            "symbol": "AAA", "name": "Alpha", "qty": 3, "cost": 10.123456
        }));
        let valuation = HoldingValuation {
            input,
            units: dec!(3),
            price: dec!(12.345678),
            price_source: PriceSource::Market,
            cost_total: dec!(30.370368),
            market_value: dec!(37.037034),
            unrealized_pl: dec!(6.666666),
            return_pct: dec!(21.95122),
            div_ttm_per_share: dec!(0.1234567),
            div_ttm_total: dec!(0.3703701),
            div_yield_price_pct: dec!(1.000001),
            div_yield_cost_pct: dec!(1.21951),
        };

        let json = serde_json::to_value(&valuation).unwrap();
        let close = |key: &str, expected: f64| {
            let actual = json[key].as_f64().unwrap();
            assert!((actual - expected).abs() < 1e-9, "{key}: {actual} != {expected}");
        };

        assert_eq!(json["symbol"], "AAA");
        assert_eq!(json["name"], "Alpha");
        assert_eq!(json["asset_type"], "stock");
        assert_eq!(json["unit"], "shares");
        assert_eq!(json["nav_mode"], "auto");
        assert_eq!(json["price_source"], "market");
        close("cost", 10.1235);
        close("price", 12.3457);
        close("cost_total", 30.37);
        close("market_value", 37.04);
        close("unrealized_pl", 6.67);
        close("return_pct", 21.95);
        close("div_ttm_per_share", 0.123457);
        close("div_ttm_total", 0.37);
        close("div_yield_price_pct", 1.0);
        close("div_yield_cost_pct", 1.2195);
    }
}
