//! Lenient field coercion for loosely-typed JSON rows.
//!
//! Every read produces a usable value. Anything that cannot be interpreted
//! falls back to the default and leaves a [`CoercionWarning`] behind, so the
//! caller can report what was ignored without failing the request.

use std::str::FromStr;

use log::warn;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

/// A field that was replaced by its default during coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoercionWarning {
    /// Payload section the row came from ("holdings" or "loans")
    pub section: &'static str,
    /// Zero-based index of the row within its section
    pub row: usize,
    /// Field name, empty when the whole row was unusable
    pub field: String,
    /// The offending value as JSON text
    pub value: String,
    pub reason: &'static str,
}

/// Reads typed fields out of one payload row.
pub struct FieldReader<'v, 'w> {
    section: &'static str,
    row: usize,
    fields: Option<&'v Map<String, Value>>,
    warnings: &'w mut Vec<CoercionWarning>,
}

impl<'v, 'w> FieldReader<'v, 'w> {
    /// Wrap a row. A row that is not a JSON object reads as empty.
    pub fn new(
        section: &'static str,
        row: usize,
        value: &'v Value,
        warnings: &'w mut Vec<CoercionWarning>,
    ) -> Self {
        let mut reader = Self {
            section,
            row,
            fields: value.as_object(),
            warnings,
        };
        if reader.fields.is_none() {
            reader.warn("", value, "row is not an object");
        }
        reader
    }

    /// Read a numeric field, falling back to `default` when absent, null or
    /// not interpretable as a number.
    pub fn decimal(&mut self, field: &str, default: Decimal) -> Decimal {
        let Some(raw) = self.raw(field) else {
            return default;
        };
        match coerce_decimal(raw) {
            Some(value) => value,
            None => {
                self.warn(field, raw, "not a number");
                default
            }
        }
    }

    /// Read a string field, trimmed. Absent or null reads as an empty string;
    /// other scalars are rendered as their JSON text.
    pub fn text(&mut self, field: &str) -> String {
        match self.raw(field) {
            None => String::new(),
            Some(Value::String(s)) => s.trim().to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Read an enumerated field. Empty reads as `default`; an unknown value
    /// reads as `default` with a warning.
    pub fn choice<T: FromStr>(&mut self, field: &str, default: T) -> T {
        let text = self.text(field);
        if text.is_empty() {
            return default;
        }
        match text.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                if let Some(raw) = self.raw(field) {
                    self.warn(field, raw, "unknown value");
                }
                default
            }
        }
    }

    fn raw(&self, field: &str) -> Option<&'v Value> {
        self.fields
            .and_then(|fields| fields.get(field))
            .filter(|value| !value.is_null())
    }

    fn warn(&mut self, field: &str, value: &Value, reason: &'static str) {
        let warning = CoercionWarning {
            section: self.section,
            row: self.row,
            field: field.to_string(),
            value: value.to_string(),
            reason,
        };
        warn!(
            "Ignoring {}[{}].{} = {}: {}",
            warning.section, warning.row, warning.field, warning.value, reason
        );
        self.warnings.push(warning);
    }
}

/// Interpret a JSON value as a decimal: numbers, numeric strings and
/// booleans (true = 1, false = 0). Returns `None` for anything else.
pub fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        Value::Bool(flag) => Some(if *flag { Decimal::ONE } else { Decimal::ZERO }),
        _ => None,
    }
}

/// Parse plain (`12.5`) or scientific (`1.25e1`) notation.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
}
