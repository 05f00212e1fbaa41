//! Reporting
//!
//! Terminal tables, JSON summaries and PNG charts built from the derived tables.

pub mod charts;
pub mod summary;
pub mod table;

pub use summary::{write_json, FoodReport, NameReport};
