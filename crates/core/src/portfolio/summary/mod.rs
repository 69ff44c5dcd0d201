//! Single-position calculator.

pub mod summary_model;

pub use summary_model::{PositionSummary, PositionSummaryRequest};
