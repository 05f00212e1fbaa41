//! Nutrition analysis module
//!
//! Nutrient normalization and protein density ranking.

pub mod normalizer;
pub mod ranking;
pub mod targets;

pub use normalizer::{normalize, normalize_par, normalize_record, normalize_with, MatchPolicy};
pub use ranking::{
    filter_viable_protein_sources, protein_density, rank_by_protein_density,
    rank_by_protein_density_lenient, RankingOutcome, DEFAULT_MIN_PROTEIN_G,
};
pub use targets::TargetNutrient;
