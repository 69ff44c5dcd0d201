use rust_decimal::Decimal;
use serde::Serialize;

use networth_market_data::Quote;

/// Where a holding's price came from, as reported in the response.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    Manual,
    Market,
    Unavailable,
}

/// Outcome of resolving the price for one holding.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceResolution {
    /// Fund priced from its manual NAV; no lookup was made.
    Manual(Decimal),
    /// Latest close from the quote source.
    Market(Quote),
    /// The lookup failed or timed out. Values the position at zero.
    Unavailable(String),
}

impl PriceResolution {
    pub fn price(&self) -> Decimal {
        match self {
            PriceResolution::Manual(nav) => *nav,
            PriceResolution::Market(quote) => quote.close,
            PriceResolution::Unavailable(_) => Decimal::ZERO,
        }
    }

    pub fn source(&self) -> PriceSource {
        match self {
            PriceResolution::Manual(_) => PriceSource::Manual,
            PriceResolution::Market(_) => PriceSource::Market,
            PriceResolution::Unavailable(_) => PriceSource::Unavailable,
        }
    }
}
