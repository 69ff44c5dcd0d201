use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rust_decimal::Decimal;

use super::valuation_model::{PortfolioRequest, PortfolioTotals, PortfolioValuation};
use super::valuation_traits::PortfolioValuationServiceTrait;
use crate::constants::{DIVIDEND_WINDOW_DAYS, LOT_SIZE};
use crate::errors::{CalculatorError, Error, Result};
use crate::portfolio::holdings::{normalize_units, HoldingInput, HoldingValuation, PositionValue};
use crate::portfolio::income::{trailing_dividend_per_share, DividendYield};
use crate::portfolio::loans::{LoanInput, LoanInterest, LoanValuation};
use crate::portfolio::summary::{PositionSummary, PositionSummaryRequest};
use crate::quotes::QuoteLookupService;
use crate::utils::coercion::CoercionWarning;
use networth_market_data::QuoteSource;

/// Tunables for a valuation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationSettings {
    /// Shares per board lot
    pub lot_size: Decimal,
    /// Trailing dividend window
    pub dividend_window_days: i64,
    /// Bound on each quote source call. `None` waits indefinitely.
    pub quote_timeout: Option<Duration>,
}

impl Default for ValuationSettings {
    fn default() -> Self {
        Self {
            lot_size: LOT_SIZE,
            dividend_window_days: DIVIDEND_WINDOW_DAYS,
            quote_timeout: Some(Duration::from_secs(10)),
        }
    }
}

#[derive(Clone)]
pub struct PortfolioValuationService {
    quotes: QuoteLookupService,
    settings: ValuationSettings,
}

impl PortfolioValuationService {
    pub fn new(quote_source: Arc<dyn QuoteSource>, settings: ValuationSettings) -> Self {
        Self {
            quotes: QuoteLookupService::new(quote_source, settings.quote_timeout),
            settings,
        }
    }

    pub fn settings(&self) -> &ValuationSettings {
        &self.settings
    }

    async fn value_holding(
        &self,
        input: HoldingInput,
        as_of: DateTime<Utc>,
    ) -> Result<HoldingValuation> {
        let units = normalize_units(input.asset_type, input.unit, input.qty, self.settings.lot_size)?;

        let resolution = self.quotes.resolve_price(&input).await;
        let price = resolution.price();
        let position = PositionValue::calculate(units, input.cost, price)?;

        let dividends = if input.tracks_dividends() {
            let events = self.quotes.dividend_history(&input.symbol).await;
            let per_share =
                match trailing_dividend_per_share(&events, as_of, self.settings.dividend_window_days)
                {
                    Ok(sum) => sum,
                    Err(e) => {
                        warn!("Ignoring dividends for {}: {}", input.symbol, e);
                        Decimal::ZERO
                    }
                };
            DividendYield::calculate(per_share, units, price, input.cost)?
        } else {
            DividendYield::zero()
        };

        Ok(HoldingValuation {
            units,
            price,
            price_source: resolution.source(),
            cost_total: position.cost_total,
            market_value: position.market_value,
            unrealized_pl: position.unrealized_pl,
            return_pct: position.return_pct,
            div_ttm_per_share: dividends.per_share,
            div_ttm_total: dividends.total,
            div_yield_price_pct: dividends.yield_on_price_pct,
            div_yield_cost_pct: dividends.yield_on_cost_pct,
            input,
        })
    }

    /// Value one holding and fold it into `totals`. A row whose figures
    /// overflow is left out and reported as a warning.
    async fn try_add_holding(
        &self,
        totals: &mut PortfolioTotals,
        input: HoldingInput,
        as_of: DateTime<Utc>,
    ) -> Result<std::result::Result<HoldingValuation, CalculatorError>> {
        let valuation = match self.value_holding(input, as_of).await {
            Ok(valuation) => valuation,
            Err(Error::Calculation(e)) => return Ok(Err(e)),
            Err(e) => return Err(e),
        };
        Ok(totals.add_holding(&valuation).map(|()| valuation))
    }

    fn value_loan(&self, input: LoanInput) -> Result<LoanValuation> {
        let interest = LoanInterest::calculate(input.principal, input.rate)?;
        Ok(LoanValuation {
            input,
            monthly_interest: interest.monthly,
            annual_interest: interest.annual,
        })
    }
}

fn overflow_warning(
    section: &'static str,
    row: usize,
    label: &str,
    error: &CalculatorError,
) -> CoercionWarning {
    warn!("Dropping {}[{}] ({}): {}", section, row, label, error);
    CoercionWarning {
        section,
        row,
        field: String::new(),
        value: serde_json::Value::from(label).to_string(),
        reason: "arithmetic overflow",
    }
}

#[async_trait]
impl PortfolioValuationServiceTrait for PortfolioValuationService {
    async fn value_portfolio(
        &self,
        request: PortfolioRequest,
        as_of: DateTime<Utc>,
    ) -> Result<PortfolioValuation> {
        let started = Instant::now();
        let PortfolioRequest {
            holdings,
            loans,
            mut warnings,
        } = request;

        let mut totals = PortfolioTotals::default();

        let mut invest = Vec::with_capacity(holdings.len());
        for (row, holding) in holdings.into_iter().enumerate() {
            if holding.symbol.is_empty() {
                debug!("Skipping holdings[{}]: empty symbol", row);
                continue;
            }
            let symbol = holding.symbol.clone();
            match self.try_add_holding(&mut totals, holding, as_of).await? {
                Ok(valuation) => invest.push(valuation),
                Err(e) => warnings.push(overflow_warning("holdings", row, &symbol, &e)),
            }
        }

        let mut valued_loans = Vec::with_capacity(loans.len());
        for (row, loan) in loans.into_iter().enumerate() {
            let name = loan.name.clone();
            let added = self.value_loan(loan).and_then(|valuation| {
                totals.add_loan(&valuation)?;
                Ok(valuation)
            });
            match added {
                Ok(valuation) => valued_loans.push(valuation),
                Err(Error::Calculation(e)) => {
                    warnings.push(overflow_warning("loans", row, &name, &e))
                }
                Err(e) => return Err(e),
            }
        }

        totals.finalize()?;

        info!(
            "Valued {} holdings and {} loans via {} in {:?} ({} warnings)",
            invest.len(),
            valued_loans.len(),
            self.quotes.source_id(),
            started.elapsed(),
            warnings.len()
        );

        Ok(PortfolioValuation {
            invest,
            totals,
            loans: valued_loans,
            warnings,
            as_of,
        })
    }

    async fn summarize_position(&self, request: PositionSummaryRequest) -> Result<PositionSummary> {
        let current_price = self.quotes.latest_price(&request.symbol).await.price();
        let dividends = self.quotes.dividend_history(&request.symbol).await;
        Ok(PositionSummary::calculate(&request, current_price, &dividends)?)
    }
}
