//! Market data models
//!
//! - `quote` - Latest price data (Quote)
//! - `dividend` - Dividend payment history (DividendEvent)

mod dividend;
mod quote;

pub use dividend::DividendEvent;
pub use quote::Quote;
