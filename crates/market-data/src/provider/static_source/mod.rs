//! In-memory quote source.
//!
//! Serves fixed closes and dividend histories. Used when the server runs
//! without network access and as the quote source in tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::{DividendEvent, Quote};
use crate::provider::QuoteSource;

const PROVIDER_ID: &str = "STATIC";

/// One symbol's entry in a static quotes file.
#[derive(Debug, Default, Deserialize)]
struct StaticEntry {
    close: Option<Decimal>,
    #[serde(default)]
    currency: String,
    #[serde(default)]
    dividends: Vec<DividendEvent>,
}

/// Quote source backed by in-memory maps keyed by upper-cased symbol.
#[derive(Debug, Default)]
pub struct StaticQuoteSource {
    closes: HashMap<String, Quote>,
    dividends: HashMap<String, Vec<DividendEvent>>,
    lookups: AtomicUsize,
}

impl StaticQuoteSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a source from JSON shaped like
    /// `{"AAPL": {"close": 189.5, "currency": "USD", "dividends": [{"timestamp": "2025-02-10T00:00:00Z", "amount": 0.25}]}}`.
    pub fn from_json(json: &str) -> Result<Self, MarketDataError> {
        let entries: HashMap<String, StaticEntry> =
            serde_json::from_str(json).map_err(|e| MarketDataError::ValidationFailed {
                message: format!("Invalid static quotes file: {}", e),
            })?;

        let mut source = Self::new();
        for (symbol, entry) in entries {
            if let Some(close) = entry.close {
                source = source.with_quote(&symbol, close, &entry.currency);
            }
            for event in entry.dividends {
                source = source.with_dividend(&symbol, event.timestamp, event.amount);
            }
        }
        Ok(source)
    }

    pub fn with_close(self, symbol: &str, close: Decimal) -> Self {
        self.with_quote(symbol, close, "")
    }

    pub fn with_quote(mut self, symbol: &str, close: Decimal, currency: &str) -> Self {
        self.closes.insert(
            Self::key(symbol),
            Quote::new(Utc::now(), close, currency, PROVIDER_ID),
        );
        self
    }

    pub fn with_dividend(mut self, symbol: &str, timestamp: DateTime<Utc>, amount: Decimal) -> Self {
        let events = self.dividends.entry(Self::key(symbol)).or_default();
        events.push(DividendEvent::new(timestamp, amount));
        events.sort_by_key(|event| event.timestamp);
        self
    }

    /// Number of lookups served so far (both quote and dividend calls).
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn key(symbol: &str) -> String {
        symbol.trim().to_uppercase()
    }

    fn is_known(&self, key: &str) -> bool {
        self.closes.contains_key(key) || self.dividends.contains_key(key)
    }
}

#[async_trait]
impl QuoteSource for StaticQuoteSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let key = Self::key(symbol);
        match self.closes.get(&key) {
            Some(quote) => Ok(quote.clone()),
            None if self.is_known(&key) => Err(MarketDataError::NoData {
                symbol: symbol.to_string(),
            }),
            None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
        }
    }

    async fn dividend_history(&self, symbol: &str) -> Result<Vec<DividendEvent>, MarketDataError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let key = Self::key(symbol);
        if !self.is_known(&key) {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        Ok(self.dividends.get(&key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_latest_quote_is_case_insensitive() {
        let source = StaticQuoteSource::new().with_close("2330.tw", dec!(1045));

        let quote = source.latest_quote(" 2330.TW ").await.unwrap();
        assert_eq!(quote.close, dec!(1045));
        assert_eq!(quote.source, "STATIC");
        assert_eq!(source.lookup_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_symbol_is_not_found() {
        let source = StaticQuoteSource::new();

        let err = source.latest_quote("NOPE").await.unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(_)));

        let err = source.dividend_history("NOPE").await.unwrap_err();
        assert!(err.is_missing_data());
        assert_eq!(source.lookup_count(), 2);
    }

    #[tokio::test]
    async fn test_dividends_are_sorted_and_close_optional() {
        let now = Utc::now();
        let source = StaticQuoteSource::new()
            .with_dividend("VTI", now - Duration::days(10), dec!(0.9))
            .with_dividend("VTI", now - Duration::days(100), dec!(0.8));

        let events = source.dividend_history("vti").await.unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].timestamp < events[1].timestamp);
        assert_eq!(events[0].amount, dec!(0.8));

        let err = source.latest_quote("VTI").await.unwrap_err();
        assert!(matches!(err, MarketDataError::NoData { .. }));
    }

    #[tokio::test]
    async fn test_priced_symbol_without_dividends_has_empty_history() {
        let source = StaticQuoteSource::new().with_close("AAA", dec!(15));
        assert!(source.dividend_history("AAA").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_from_json() {
        let json = r#"{
            "AAA": {"close": 15, "currency": "USD"},
            "0056.TW": {
                "close": 36.2,
                "dividends": [{"timestamp": "2025-07-16T00:00:00Z", "amount": 1.07}]
            }
        }"#;
        let source = StaticQuoteSource::from_json(json).unwrap();

        let quote = source.latest_quote("AAA").await.unwrap();
        assert_eq!(quote.close, dec!(15));
        assert_eq!(quote.currency, "USD");
        assert_eq!(source.latest_quote("0056.tw").await.unwrap().currency, "");
        let events = source.dividend_history("0056.tw").await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].amount, dec!(1.07));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = StaticQuoteSource::from_json("not json").unwrap_err();
        assert!(matches!(err, MarketDataError::ValidationFailed { .. }));
    }
}
