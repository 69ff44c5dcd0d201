use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::coercion::FieldReader;
use crate::utils::decimal_utils::{serialize_currency, serialize_price};

/// One loan row after coercion.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LoanInput {
    pub name: String,
    #[serde(serialize_with = "serialize_currency")]
    pub principal: Decimal,
    /// Annual rate in percent (3.0 means 3%)
    #[serde(serialize_with = "serialize_price")]
    pub rate: Decimal,
}

impl LoanInput {
    pub fn from_reader(reader: &mut FieldReader<'_, '_>) -> Self {
        LoanInput {
            name: reader.text("name"),
            principal: reader.decimal("principal", Decimal::ZERO),
            rate: reader.decimal("rate", Decimal::ZERO),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LoanValuation {
    #[serde(flatten)]
    pub input: LoanInput,
    #[serde(serialize_with = "serialize_currency")]
    pub monthly_interest: Decimal,
    #[serde(serialize_with = "serialize_currency")]
    pub annual_interest: Decimal,
}
