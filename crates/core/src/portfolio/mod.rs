pub mod holdings;
pub mod income;
pub mod loans;
pub mod summary;
pub mod valuation;

pub use holdings::*;
pub use income::*;
pub use loans::*;
pub use summary::*;
pub use valuation::*;
