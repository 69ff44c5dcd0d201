//! Portfolio valuation service traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::valuation_model::{PortfolioRequest, PortfolioValuation};
use crate::errors::Result;
use crate::portfolio::summary::{PositionSummary, PositionSummaryRequest};

/// Trait defining the contract for portfolio valuation.
#[async_trait]
pub trait PortfolioValuationServiceTrait: Send + Sync {
    /// Value every holding and loan in `request`.
    ///
    /// Holdings are processed in input order, one quote lookup at a time.
    /// Rows with an empty symbol are skipped. Quote failures never fail the
    /// call; only arithmetic overflow does.
    ///
    /// # Arguments
    /// * `request` - Coerced holdings and loans
    /// * `as_of` - End of the trailing dividend window
    async fn value_portfolio(
        &self,
        request: PortfolioRequest,
        as_of: DateTime<Utc>,
    ) -> Result<PortfolioValuation>;

    /// Single-position calculator: price, P&L, lifetime dividends per share
    /// and the interest on a loan taken against the position.
    async fn summarize_position(&self, request: PositionSummaryRequest) -> Result<PositionSummary>;
}
