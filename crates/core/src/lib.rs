//! Networth Core - holdings valuation, dividend yield and loan interest.
//!
//! This crate turns a loosely-typed portfolio payload into valued
//! holdings, loan interest figures and portfolio totals. Live prices and
//! dividend history come from a [`networth_market_data::QuoteSource`]
//! supplied by the caller.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod quotes;
pub mod utils;

pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
