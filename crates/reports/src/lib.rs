//! Reporting over inventory and sales.
//!
//! Aggregations here only read: nothing in this crate mutates a store.

pub mod engine;

pub use engine::{InventorySummary, ReportEngine, TopSeller};
