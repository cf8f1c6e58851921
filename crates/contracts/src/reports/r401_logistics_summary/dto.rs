use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::amount;

/// Leaf trip entry. The customer name is the innermost key of the
/// `[vehicle, driver, cluster, customer]` chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripLeaf {
    pub trip_id: String,
    pub customer: String,
    pub status: String,
    #[serde(deserialize_with = "amount::lenient")]
    pub amount: Decimal,
    pub trip_date: NaiveDateTime,
}

/// Nested source shape of the logistics summary endpoint: groups nest
/// vehicle → driver → cluster, leaves are customer trip entries.
///
/// Never mutated and never cyclic; the engine flattens it with an
/// iterative traversal before any processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TripNode {
    Group {
        key: String,
        #[serde(default)]
        children: Vec<TripNode>,
    },
    Leaf(TripLeaf),
}
