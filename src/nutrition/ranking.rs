//! Protein density ranking
//!
//! Ranks normalized foods by grams of protein per kilocalorie and filters
//! out foods that are not worthwhile protein sources.

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::NormalizedFood;

/// Minimum protein, in grams, for a food to count as a protein source
pub const DEFAULT_MIN_PROTEIN_G: f64 = 1.0;

/// Protein grams per kilocalorie for one food
pub fn protein_density(food: &NormalizedFood) -> AnalysisResult<f64> {
    if food.is_zero_calorie() {
        return Err(AnalysisError::DivisionUndefined {
            identifier: food.identifier.clone(),
        });
    }
    Ok(food.protein_g / food.kcal)
}

/// Sort by protein_per_kcal descending. Stable, so ties keep input order.
fn sort_by_density(foods: &mut [NormalizedFood]) {
    foods.sort_by(|a, b| {
        let a = a.protein_per_kcal.unwrap_or(f64::NEG_INFINITY);
        let b = b.protein_per_kcal.unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
}

/// Rank foods by protein density, highest first.
///
/// Fails on the first zero-calorie food; callers that want to skip those
/// should filter first or use [`rank_by_protein_density_lenient`].
pub fn rank_by_protein_density(foods: &[NormalizedFood]) -> AnalysisResult<Vec<NormalizedFood>> {
    let mut ranked = foods
        .iter()
        .map(|food| {
            let density = protein_density(food)?;
            Ok(NormalizedFood {
                protein_per_kcal: Some(density),
                ..food.clone()
            })
        })
        .collect::<AnalysisResult<Vec<_>>>()?;

    sort_by_density(&mut ranked);
    Ok(ranked)
}

/// Result of a ranking that sets aside foods with undefined density
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankingOutcome {
    pub ranked: Vec<NormalizedFood>,
    /// Identifiers of zero-calorie foods, in input order
    pub undefined: Vec<String>,
}

/// Rank foods by protein density, excluding zero-calorie foods instead of failing
pub fn rank_by_protein_density_lenient(foods: &[NormalizedFood]) -> RankingOutcome {
    let mut outcome = RankingOutcome::default();

    for food in foods {
        match protein_density(food) {
            Ok(density) => outcome.ranked.push(NormalizedFood {
                protein_per_kcal: Some(density),
                ..food.clone()
            }),
            Err(e) => {
                tracing::debug!("Excluding from ranking: {}", e);
                outcome.undefined.push(food.identifier.clone());
            }
        }
    }

    if !outcome.undefined.is_empty() {
        tracing::warn!(
            "{} foods have no calories and were left out of the ranking",
            outcome.undefined.len()
        );
    }

    sort_by_density(&mut outcome.ranked);
    outcome
}

/// Keep foods with calories and at least `min_protein_g` grams of protein.
///
/// Relative order is preserved; the input is not modified.
pub fn filter_viable_protein_sources(
    foods: &[NormalizedFood],
    min_protein_g: f64,
) -> Vec<NormalizedFood> {
    let viable: Vec<NormalizedFood> = foods
        .iter()
        .filter(|food| !food.is_zero_calorie() && food.protein_g >= min_protein_g)
        .cloned()
        .collect();

    tracing::debug!(
        "{} of {} foods are viable protein sources (min {} g)",
        viable.len(),
        foods.len(),
        min_protein_g
    );
    viable
}
