pub mod amount;
pub mod period;
pub mod query;
pub mod status;
