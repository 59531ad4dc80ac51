use rust_decimal::Decimal;
use serde::Serialize;

use crate::number::serialize_number;

/// A validated point row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    #[serde(serialize_with = "serialize_number")]
    pub point_device: Decimal,
    pub point_type: String,
    #[serde(serialize_with = "serialize_number")]
    pub point_instance: Decimal,
    pub point_name: String,
    pub point_description: String,
}
