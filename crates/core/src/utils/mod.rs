pub mod coercion;
pub mod decimal_utils;
