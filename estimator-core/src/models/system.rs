use rust_decimal::Decimal;
use serde::Serialize;

use crate::number::serialize_number;

/// A validated system row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemRecord {
    pub name: String,
    #[serde(serialize_with = "serialize_number")]
    pub inputs: Decimal,
    #[serde(serialize_with = "serialize_number")]
    pub outputs: Decimal,
    #[serde(rename = "netVars", serialize_with = "serialize_number")]
    pub net_vars: Decimal,
    #[serde(serialize_with = "serialize_number")]
    pub typicals: Decimal,
    #[serde(serialize_with = "serialize_number")]
    pub complexity: Decimal,
}
