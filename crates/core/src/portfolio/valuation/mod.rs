//! Portfolio valuation - request parsing, aggregation and the service that
//! ties holdings, dividends and loans together.

mod valuation_model;
mod valuation_service;
mod valuation_traits;

pub use valuation_model::*;
pub use valuation_service::{PortfolioValuationService, ValuationSettings};
pub use valuation_traits::PortfolioValuationServiceTrait;
