//! Nutrient normalization
//!
//! Flattens each food's sparse, unordered nutrient list into the fixed
//! kcal / fat / protein / carbs columns.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::targets::TargetNutrient;
use crate::models::{FoodRecord, NormalizedFood};

/// Which duplicate wins when a record repeats a (description, unit) pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The earliest measurement in input order
    #[default]
    FirstWins,
    /// The latest measurement in input order
    LastWins,
}

/// Per-record lookup table from (description, unit) to value.
///
/// Measurements with a missing description, unit or value are never indexed.
struct NutrientIndex<'a> {
    values: HashMap<(&'a str, &'a str), f64>,
}

impl<'a> NutrientIndex<'a> {
    fn build(record: &'a FoodRecord, policy: MatchPolicy) -> Self {
        let mut values = HashMap::with_capacity(record.nutrients.len());

        for measurement in &record.nutrients {
            let (Some(key), Some(value)) = (measurement.key(), measurement.value) else {
                continue;
            };
            match policy {
                MatchPolicy::FirstWins => {
                    values.entry(key).or_insert(value);
                }
                MatchPolicy::LastWins => {
                    values.insert(key, value);
                }
            }
        }

        Self { values }
    }

    fn get(&self, target: TargetNutrient) -> Option<f64> {
        self.values
            .get(&(target.description(), target.unit()))
            .copied()
    }
}

/// Normalize a single record under the given duplicate policy
pub fn normalize_record(record: &FoodRecord, policy: MatchPolicy) -> NormalizedFood {
    let index = NutrientIndex::build(record, policy);
    let mut food = NormalizedFood::zero(record.identifier.clone());

    for target in TargetNutrient::ALL {
        let Some(value) = index.get(target) else {
            continue;
        };
        match target {
            TargetNutrient::Kcal => food.kcal = value,
            TargetNutrient::FatG => food.fat_g = value,
            TargetNutrient::ProteinG => food.protein_g = value,
            TargetNutrient::CarbsG => food.carbs_g = value,
        }
    }

    food
}

/// Normalize every record, first duplicate wins.
///
/// Output is 1:1 with the input and in the same order. Missing nutrients
/// default to 0.0.
pub fn normalize(records: &[FoodRecord]) -> Vec<NormalizedFood> {
    normalize_with(records, MatchPolicy::default())
}

/// Normalize every record under an explicit duplicate policy
pub fn normalize_with(records: &[FoodRecord], policy: MatchPolicy) -> Vec<NormalizedFood> {
    let foods: Vec<NormalizedFood> = records
        .iter()
        .map(|record| normalize_record(record, policy))
        .collect();

    tracing::debug!("Normalized {} food records ({:?})", foods.len(), policy);
    foods
}

/// Parallel variant of [`normalize`]; records are independent and the
/// collected output keeps input order.
pub fn normalize_par(records: &[FoodRecord]) -> Vec<NormalizedFood> {
    let policy = MatchPolicy::default();
    let foods: Vec<NormalizedFood> = records
        .par_iter()
        .map(|record| normalize_record(record, policy))
        .collect();

    tracing::debug!("Normalized {} food records in parallel", foods.len());
    foods
}
