//! Holdings - input rows, unit normalization and per-position valuation.

pub mod holdings_calculator;
pub mod holdings_model;

pub use holdings_calculator::{normalize_units, PositionValue};
pub use holdings_model::*;

#[cfg(test)]
mod holdings_model_tests;
