//! Quote source trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{DividendEvent, Quote};

/// Trait for sources of live prices and dividend history.
///
/// Implementations must tolerate unknown or malformed symbols by
/// returning an error (typically [`MarketDataError::SymbolNotFound`])
/// rather than panicking. Callers decide how to degrade.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use networth_market_data::{DividendEvent, MarketDataError, Quote, QuoteSource};
///
/// struct FixedSource;
///
/// #[async_trait]
/// impl QuoteSource for FixedSource {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
///         Err(MarketDataError::SymbolNotFound(symbol.to_string()))
///     }
///
///     async fn dividend_history(&self, _symbol: &str) -> Result<Vec<DividendEvent>, MarketDataError> {
///         Ok(vec![])
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Unique identifier for this source, e.g. "YAHOO".
    ///
    /// Used for logging and for attributing timeouts.
    fn id(&self) -> &'static str;

    /// Fetch the most recent closing price for `symbol`.
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch the full dividend history for `symbol`, ordered by timestamp
    /// ascending. An instrument that never paid a dividend yields an empty
    /// vector, not an error.
    async fn dividend_history(&self, symbol: &str) -> Result<Vec<DividendEvent>, MarketDataError>;
}
