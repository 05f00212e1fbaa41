//! fooddata Library
//!
//! Nutrient normalization and protein density ranking for the USDA food
//! database, plus year-by-year trends over the national baby name dataset.

pub mod build_info;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod names;
pub mod nutrition;
pub mod reports;

pub use error::{AnalysisError, AnalysisResult};
