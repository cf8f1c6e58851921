use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::amount;

/// One dispatch-plan line. Chain: `[vehicle_plate, driver, cluster]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchLineDto {
    pub delivery_no: String,
    pub vehicle_plate: String,
    pub driver: String,
    pub cluster: String,
    pub status: String,
    #[serde(deserialize_with = "amount::lenient")]
    pub amount: Decimal,
    pub dispatch_date: NaiveDateTime,
    /// Source payload passthrough kept for troubleshooting; never read by
    /// the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}
