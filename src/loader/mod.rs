//! Data loaders
//!
//! Turn the raw dataset files into in-memory records.

pub mod food;
pub mod names;

pub use food::{load_food_records, parse_food_records, record_from_value, FoodLoad};
pub use names::{load_years, parse_year_file, year_file_name};
