//! Bounded quote lookups.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use super::model::PriceResolution;
use crate::portfolio::holdings::HoldingInput;
use networth_market_data::{DividendEvent, MarketDataError, QuoteSource};

/// Wraps a [`QuoteSource`] with a per-call timeout and soft-fail semantics.
#[derive(Clone)]
pub struct QuoteLookupService {
    source: Arc<dyn QuoteSource>,
    timeout: Option<Duration>,
}

impl QuoteLookupService {
    /// `timeout` of `None` waits for the source indefinitely.
    pub fn new(source: Arc<dyn QuoteSource>, timeout: Option<Duration>) -> Self {
        Self { source, timeout }
    }

    pub fn source_id(&self) -> &'static str {
        self.source.id()
    }

    /// Resolve the price for a holding. Manual-NAV funds never reach the
    /// quote source.
    pub async fn resolve_price(&self, holding: &HoldingInput) -> PriceResolution {
        if holding.uses_manual_nav() {
            debug!("Using manual NAV {} for {}", holding.manual_nav, holding.symbol);
            return PriceResolution::Manual(holding.manual_nav);
        }
        self.latest_price(&holding.symbol).await
    }

    /// Latest close for `symbol`, or `Unavailable` on any failure.
    pub async fn latest_price(&self, symbol: &str) -> PriceResolution {
        match self.bounded(self.source.latest_quote(symbol)).await {
            Ok(quote) => PriceResolution::Market(quote),
            Err(e) => {
                self.log_failure("price", symbol, &e);
                PriceResolution::Unavailable(e.to_string())
            }
        }
    }

    /// Dividend history for `symbol`, or an empty list on any failure.
    pub async fn dividend_history(&self, symbol: &str) -> Vec<DividendEvent> {
        match self.bounded(self.source.dividend_history(symbol)).await {
            Ok(events) => events,
            Err(e) => {
                self.log_failure("dividends", symbol, &e);
                Vec::new()
            }
        }
    }

    async fn bounded<T, F>(&self, lookup: F) -> Result<T, MarketDataError>
    where
        F: Future<Output = Result<T, MarketDataError>>,
    {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, lookup)
                .await
                .map_err(|_| MarketDataError::Timeout {
                    provider: self.source.id().to_string(),
                })?,
            None => lookup.await,
        }
    }

    fn log_failure(&self, what: &str, symbol: &str, error: &MarketDataError) {
        if error.is_missing_data() {
            debug!("No {} for {} from {}: {}", what, symbol, self.source.id(), error);
        } else {
            warn!(
                "Failed to fetch {} for {} from {}: {}",
                what,
                symbol,
                self.source.id(),
                error
            );
        }
    }
}
