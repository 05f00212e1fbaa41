//! Normalized nutrition row
//!
//! The fixed-schema table row produced from a FoodRecord.

use serde::{Deserialize, Serialize};

/// Macronutrients for a single food, one column per target nutrient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFood {
    pub identifier: String,
    pub kcal: f64,
    pub fat_g: f64,      // grams
    pub protein_g: f64,  // grams
    pub carbs_g: f64,    // grams
    /// Protein grams per kilocalorie; only set by ranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_per_kcal: Option<f64>,
}

impl NormalizedFood {
    /// Create a row with every nutrient at its 0.0 default
    pub fn zero(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// The four nutrient columns as (kcal, fat_g, protein_g, carbs_g)
    pub fn macros(&self) -> (f64, f64, f64, f64) {
        (self.kcal, self.fat_g, self.protein_g, self.carbs_g)
    }

    /// True when the food has no calories, making protein density undefined
    pub fn is_zero_calorie(&self) -> bool {
        self.kcal == 0.0
    }
}
