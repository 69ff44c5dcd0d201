//! Loans - liability rows and simple interest.

pub mod loans_calculator;
pub mod loans_model;

pub use loans_calculator::LoanInterest;
pub use loans_model::*;
