//! Data models
//!
//! Plain Rust structs for the food and name datasets.

mod food_record;
mod name_record;
mod nutrition;

pub use food_record::{FoodRecord, NutrientMeasurement};
pub use name_record::{NameRecord, Sex, SexCounts};
pub use nutrition::NormalizedFood;
