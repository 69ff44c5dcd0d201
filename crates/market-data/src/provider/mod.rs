//! Quote source abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteSource` trait the valuation engine consumes
//! - Yahoo Finance implementation for live data
//! - An in-memory implementation for offline runs and tests

mod traits;

pub mod static_source;
pub mod yahoo;

pub use traits::QuoteSource;
