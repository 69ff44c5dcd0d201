use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dividend paid per share on a given date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DividendEvent {
    /// Ex-dividend timestamp as reported by the provider
    pub timestamp: DateTime<Utc>,

    /// Cash amount per share
    pub amount: Decimal,
}

impl DividendEvent {
    pub fn new(timestamp: DateTime<Utc>, amount: Decimal) -> Self {
        Self { timestamp, amount }
    }
}
