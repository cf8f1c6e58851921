//! Hierarchical aggregation and reporting engine for the fleet logistics
//! dashboard.
//!
//! The pipeline is strictly ordered: filter → sort → span computation →
//! pagination slice for the live table, with the aggregation summary built
//! over the full filtered set, and an independently scoped exporter that
//! re-runs filter → sort → aggregate against the complete dataset.
//! Reordering these stages corrupts merged-cell rendering and is treated as
//! a correctness bug.

pub mod engine;
pub mod error;
pub mod export;
pub mod refresh;
pub mod shared;
pub mod store;
pub mod views;

pub use error::ReportError;
