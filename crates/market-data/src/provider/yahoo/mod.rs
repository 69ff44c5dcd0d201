//! Yahoo Finance quote source.
//!
//! Latest closes come from the one-day chart endpoint; dividend history
//! comes from the chart events of a max-range monthly query.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{DividendEvent, Quote};
use crate::provider::QuoteSource;

const PROVIDER_ID: &str = "YAHOO";

/// Yahoo Finance backed [`QuoteSource`].
pub struct YahooQuoteSource {
    connector: yahoo::YahooConnector,
}

impl YahooQuoteSource {
    /// Create a new Yahoo Finance quote source.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    fn map_upstream_error(symbol: &str, error: yahoo::YahooError) -> MarketDataError {
        if matches!(
            error,
            yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult
        ) {
            MarketDataError::SymbolNotFound(symbol.to_string())
        } else {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: error.to_string(),
            }
        }
    }

    /// Convert a Yahoo float into a Decimal, rejecting NaN and infinities.
    fn to_decimal(value: f64, what: &str, symbol: &str) -> Result<Decimal, MarketDataError> {
        if !value.is_finite() {
            return Err(MarketDataError::ValidationFailed {
                message: format!("Non-finite {} {} for {}", what, value, symbol),
            });
        }
        Decimal::from_f64_retain(value).ok_or_else(|| MarketDataError::ValidationFailed {
            message: format!("Failed to convert {} {} to Decimal for {}", what, value, symbol),
        })
    }

    /// Currency from the chart metadata, empty when Yahoo omits it.
    fn currency_of(response: &yahoo::YResponse) -> String {
        response
            .metadata()
            .ok()
            .and_then(|meta| meta.currency)
            .unwrap_or_default()
    }

    fn to_timestamp(seconds: i64) -> Result<DateTime<Utc>, MarketDataError> {
        Utc.timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", seconds),
            })
    }
}

#[async_trait]
impl QuoteSource for YahooQuoteSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        debug!("Fetching latest quote for {} from Yahoo", symbol);

        let response = self
            .connector
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| Self::map_upstream_error(symbol, e))?;

        let yahoo_quote = response.last_quote().map_err(|e| {
            warn!("No quotes returned for {}: {}", symbol, e);
            MarketDataError::NoData {
                symbol: symbol.to_string(),
            }
        })?;

        let timestamp = Self::to_timestamp(yahoo_quote.timestamp as i64)?;
        let close = Self::to_decimal(yahoo_quote.close, "close price", symbol)?;
        let currency = Self::currency_of(&response);

        Ok(Quote::new(timestamp, close, &currency, PROVIDER_ID))
    }

    async fn dividend_history(&self, symbol: &str) -> Result<Vec<DividendEvent>, MarketDataError> {
        debug!("Fetching dividend history for {} from Yahoo", symbol);

        let response = self
            .connector
            .get_quote_range(symbol, "1mo", "max")
            .await
            .map_err(|e| Self::map_upstream_error(symbol, e))?;

        let dividends = response
            .dividends()
            .map_err(|e| Self::map_upstream_error(symbol, e))?;

        let mut events = Vec::with_capacity(dividends.len());
        for dividend in dividends {
            match (
                Self::to_timestamp(dividend.date as i64),
                Self::to_decimal(dividend.amount, "dividend", symbol),
            ) {
                (Ok(timestamp), Ok(amount)) => events.push(DividendEvent::new(timestamp, amount)),
                (Err(e), _) | (_, Err(e)) => {
                    warn!("Skipping dividend for {} due to conversion error: {}", symbol, e);
                }
            }
        }
        events.sort_by_key(|event| event.timestamp);

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_rejects_non_finite() {
        assert!(YahooQuoteSource::to_decimal(f64::NAN, "close price", "AAPL").is_err());
        assert!(YahooQuoteSource::to_decimal(f64::INFINITY, "close price", "AAPL").is_err());
        assert!(YahooQuoteSource::to_decimal(189.5, "close price", "AAPL").is_ok());
    }

    #[test]
    fn test_to_timestamp() {
        let ts = YahooQuoteSource::to_timestamp(1_718_409_600).unwrap();
        assert_eq!(ts.format("%Y-%m-%d").to_string(), "2024-06-15");
    }

    #[test]
    fn test_no_quotes_maps_to_symbol_not_found() {
        let error = YahooQuoteSource::map_upstream_error("NOPE", yahoo::YahooError::NoQuotes);
        assert!(matches!(error, MarketDataError::SymbolNotFound(ref s) if s == "NOPE"));

        let error = YahooQuoteSource::map_upstream_error("NOPE", yahoo::YahooError::NoResult);
        assert!(error.is_missing_data());
    }
}
