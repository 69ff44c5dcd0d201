use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Shares per board lot.
pub const LOT_SIZE: Decimal = dec!(1000);

/// Lookback for trailing-twelve-month dividends.
pub const DIVIDEND_WINDOW_DAYS: i64 = 365;

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

pub const ONE_HUNDRED: Decimal = dec!(100);

// Output precision (decimal places) applied at serialization time.
pub const CURRENCY_DP: u32 = 2;
pub const PERCENT_DP: u32 = 2;
pub const YIELD_DP: u32 = 4;
pub const PRICE_DP: u32 = 4;
pub const DIVIDEND_DP: u32 = 6;
