//! Shared data contracts for the fleet logistics reporting engine.
//!
//! Pure serde types only: filter/sort/period values, the status category
//! mapping, the list request/response envelope and the per-view record shapes.
//! All processing lives in the `reporting` crate.

pub mod reports;
pub mod shared;
