use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::amount;

/// One pending-deliveries matrix record. Chain: `[cluster, customer,
/// salesman]`; each status bucket carries the amount attributable to that
/// category within the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingDeliveryDto {
    pub id: String,
    pub cluster: String,
    pub customer: String,
    pub salesman: String,
    pub order_date: NaiveDateTime,

    // Status buckets
    #[serde(default, deserialize_with = "amount::lenient")]
    pub for_dispatch: Decimal,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub loading: Decimal,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub in_transit: Decimal,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub delivered: Decimal,
}

impl PendingDeliveryDto {
    /// Row total across all status buckets.
    pub fn total(&self) -> Decimal {
        self.for_dispatch + self.loading + self.in_transit + self.delivered
    }
}
