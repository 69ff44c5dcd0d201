//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to a quote source.
///
/// The valuation engine never propagates these to its callers; every
/// variant is treated as "quote unavailable". They are kept distinct so
/// the engine can log them at a sensible level.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol exists but the provider returned no usable rows.
    #[error("No data for symbol: {symbol}")]
    NoData {
        /// The symbol that returned no data
        symbol: String,
    },

    /// The lookup did not finish within the configured bound.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that could not be converted.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },
}

impl MarketDataError {
    /// Returns true when the failure is a property of the symbol rather than
    /// of the provider (unknown ticker, empty history).
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_) | Self::NoData { .. })
    }
}
