//! Quote lookups for the valuation engine.
//!
//! - [`model`] - Typed outcome of resolving a holding's price
//! - [`service`] - Bounded, soft-failing lookups against a [`QuoteSource`]
//!
//! ```text
//! PortfolioValuationService → QuoteLookupService → QuoteSource (market-data crate)
//! ```
//!
//! Every lookup is attempted once. Failures and timeouts never escape this
//! module: prices degrade to [`PriceResolution::Unavailable`] and dividend
//! histories to an empty list.

pub mod model;
pub mod service;


pub use model::{PriceResolution, PriceSource};
pub use service::QuoteLookupService;

pub use networth_market_data::{DividendEvent, MarketDataError, Quote, QuoteSource};
