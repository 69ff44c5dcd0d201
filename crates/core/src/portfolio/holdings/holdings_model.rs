use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quotes::PriceSource;
use crate::utils::coercion::FieldReader;
use crate::utils::decimal_utils::{
    serialize_currency, serialize_dividend, serialize_percent, serialize_price, serialize_yield,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    #[default]
    Stock,
    Fund,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Fund => "fund",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stock" => Ok(AssetType::Stock),
            "fund" => Ok(AssetType::Fund),
            other => Err(format!("Unknown asset type: {}", other)),
        }
    }
}

/// How `qty` is counted for a stock holding.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Shares,
    /// Board lots of [`crate::constants::LOT_SIZE`] shares
    Lots,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Shares => "shares",
            Unit::Lots => "lots",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shares" => Ok(Unit::Shares),
            "lots" => Ok(Unit::Lots),
            other => Err(format!("Unknown unit: {}", other)),
        }
    }
}

/// Where a fund's NAV comes from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavMode {
    #[default]
    Auto,
    Manual,
}

impl NavMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavMode::Auto => "auto",
            NavMode::Manual => "manual",
        }
    }
}

impl fmt::Display for NavMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(NavMode::Auto),
            "manual" => Ok(NavMode::Manual),
            other => Err(format!("Unknown NAV mode: {}", other)),
        }
    }
}

/// One holding row after coercion. Echoed back unchanged in the response.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HoldingInput {
    pub symbol: String,
    pub name: String,
    pub asset_type: AssetType,
    pub unit: Unit,
    #[serde(serialize_with = "serialize_price")]
    pub qty: Decimal,
    /// Cost basis per share or fund unit
    #[serde(serialize_with = "serialize_price")]
    pub cost: Decimal,
    pub nav_mode: NavMode,
    #[serde(serialize_with = "serialize_price")]
    pub manual_nav: Decimal,
}

impl HoldingInput {
    pub fn from_reader(reader: &mut FieldReader<'_, '_>) -> Self {
        HoldingInput {
            symbol: reader.text("symbol"),
            name: reader.text("name"),
            asset_type: reader.choice("asset_type", AssetType::default()),
            unit: reader.choice("unit", Unit::default()),
            qty: reader.decimal("qty", Decimal::ZERO),
            cost: reader.decimal("cost", Decimal::ZERO),
            nav_mode: reader.choice("nav_mode", NavMode::default()),
            manual_nav: reader.decimal("manual_nav", Decimal::ZERO),
        }
    }

    /// Funds priced from `manual_nav` never touch the quote source.
    pub fn uses_manual_nav(&self) -> bool {
        self.asset_type == AssetType::Fund && self.nav_mode == NavMode::Manual
    }

    /// Only stocks (and ETFs traded as stocks) report trailing dividends.
    pub fn tracks_dividends(&self) -> bool {
        self.asset_type == AssetType::Stock
    }
}

/// A valued holding: the input row plus every derived figure.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HoldingValuation {
    #[serde(flatten)]
    pub input: HoldingInput,
    /// Normalized share (or fund unit) count
    #[serde(serialize_with = "serialize_price")]
    pub units: Decimal,
    #[serde(serialize_with = "serialize_price")]
    pub price: Decimal,
    pub price_source: PriceSource,
    #[serde(serialize_with = "serialize_currency")]
    pub cost_total: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub market_value: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub unrealized_pl: Decimal,
    #[serde(serialize_with = "serialize_percent")]
    pub return_pct: Decimal,
    #[serde(serialize_with = "serialize_dividend")]
    pub div_ttm_per_share: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub div_ttm_total: Decimal,
    #[serde(serialize_with = "serialize_yield")]
    pub div_yield_price_pct: Decimal,
    #[serde(serialize_with = "serialize_yield")]
    pub div_yield_cost_pct: Decimal,
}
