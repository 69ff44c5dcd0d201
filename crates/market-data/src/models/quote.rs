use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest market quote for a symbol
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Timestamp of the quote
    pub timestamp: DateTime<Utc>,

    /// Closing/current price
    pub close: Decimal,

    /// Quote currency as reported upstream, empty when unknown
    #[serde(default)]
    pub currency: String,

    /// Source of the quote (YAHOO, STATIC, etc.)
    pub source: String,
}

impl Quote {
    pub fn new(timestamp: DateTime<Utc>, close: Decimal, currency: &str, source: &str) -> Self {
        Self {
            timestamp,
            close,
            currency: currency.to_string(),
            source: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_new() {
        let quote = Quote::new(Utc::now(), dec!(150.25), "USD", "YAHOO");
        assert_eq!(quote.close, dec!(150.25));
        assert_eq!(quote.currency, "USD");
        assert_eq!(quote.source, "YAHOO");
    }
}
