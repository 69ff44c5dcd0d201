//! Dividend income - trailing-twelve-month totals and yields.

pub mod income_calculator;

pub use income_calculator::{trailing_dividend_per_share, DividendYield};
