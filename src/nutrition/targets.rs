//! Target nutrients and their database keys
//!
//! The four macronutrients extracted from each food, keyed by the exact
//! (description, unit) pair used in the USDA nutrient lists.

use serde::{Deserialize, Serialize};

// ============================================================================
// USDA Nutrient Descriptions
// ============================================================================

pub const ENERGY: &str = "Energy";
pub const TOTAL_FAT: &str = "Total lipid (fat)";
pub const PROTEIN: &str = "Protein";
pub const CARBOHYDRATE: &str = "Carbohydrate, by difference";

// ============================================================================
// Units
// ============================================================================

pub const UNIT_KCAL: &str = "kcal";
pub const UNIT_GRAMS: &str = "g";

/// A column of the normalized food table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetNutrient {
    Kcal,
    FatG,
    ProteinG,
    CarbsG,
}

impl TargetNutrient {
    /// All targets, in table column order
    pub const ALL: [TargetNutrient; 4] = [
        TargetNutrient::Kcal,
        TargetNutrient::FatG,
        TargetNutrient::ProteinG,
        TargetNutrient::CarbsG,
    ];

    /// Nutrient description as it appears in the database
    pub fn description(&self) -> &'static str {
        match self {
            TargetNutrient::Kcal => ENERGY,
            TargetNutrient::FatG => TOTAL_FAT,
            TargetNutrient::ProteinG => PROTEIN,
            TargetNutrient::CarbsG => CARBOHYDRATE,
        }
    }

    /// Unit the measurement must carry to match
    pub fn unit(&self) -> &'static str {
        match self {
            TargetNutrient::Kcal => UNIT_KCAL,
            _ => UNIT_GRAMS,
        }
    }

    /// Column name in the normalized table
    pub fn column(&self) -> &'static str {
        match self {
            TargetNutrient::Kcal => "kcal",
            TargetNutrient::FatG => "fat_g",
            TargetNutrient::ProteinG => "protein_g",
            TargetNutrient::CarbsG => "carbs_g",
        }
    }

    /// Exact, case-sensitive match on both description and unit
    pub fn matches(&self, description: &str, unit: &str) -> bool {
        description == self.description() && unit == self.unit()
    }

    /// Find the target for a (description, unit) pair
    pub fn for_key(description: &str, unit: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.matches(description, unit))
    }
}
