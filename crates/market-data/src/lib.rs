//! Networth Market Data Crate
//!
//! This crate defines the contract the valuation engine uses to obtain
//! live prices and dividend history, plus the implementations of it.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+
//! |  Valuation core  | --> |   QuoteSource    |  (trait)
//! +------------------+     +------------------+
//!                             |            |
//!                             v            v
//!                  +----------------+  +-------------------+
//!                  | Yahoo Finance  |  | StaticQuoteSource |
//!                  +----------------+  +-------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Quote`] - Latest closing price for a symbol
//! - [`DividendEvent`] - A single dividend payment (timestamp, amount per share)
//! - [`QuoteSource`] - Async lookup trait implemented by every provider
//! - [`MarketDataError`] - Errors a provider can report

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{DividendEvent, Quote};
pub use provider::static_source::StaticQuoteSource;
pub use provider::yahoo::YahooQuoteSource;
pub use provider::QuoteSource;
