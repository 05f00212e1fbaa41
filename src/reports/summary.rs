//! Report summaries
//!
//! Serializable results of a full food or name analysis run, written out as
//! JSON next to the charts.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::error::AnalysisResult;
use crate::models::{FoodRecord, NameRecord, NormalizedFood, Sex, SexCounts};
use crate::names::{self, NameShare, SexShare, TopNames};
use crate::nutrition::{self, MatchPolicy};

/// Food analysis: normalize, drop non-viable sources, rank by protein density
#[derive(Debug, Clone, Serialize)]
pub struct FoodReport {
    pub generated_at: DateTime<Utc>,
    pub build: BuildInfo,
    pub match_policy: MatchPolicy,
    pub min_protein_g: f64,
    pub total_foods: usize,
    pub rejected_records: usize,
    pub viable_foods: usize,
    pub ranked: Vec<NormalizedFood>,
}

impl FoodReport {
    pub fn build(
        records: &[FoodRecord],
        rejected_records: usize,
        policy: MatchPolicy,
        min_protein_g: f64,
    ) -> AnalysisResult<Self> {
        let normalized = nutrition::normalize_with(records, policy);
        let viable = nutrition::filter_viable_protein_sources(&normalized, min_protein_g);
        let ranked = nutrition::rank_by_protein_density(&viable)?;

        Ok(Self {
            generated_at: Utc::now(),
            build: BuildInfo::current(),
            match_policy: policy,
            min_protein_g,
            total_foods: normalized.len(),
            rejected_records,
            viable_foods: viable.len(),
            ranked,
        })
    }
}

/// Name analysis over the loaded years, focused on one name
#[derive(Debug, Clone, Serialize)]
pub struct NameReport {
    pub generated_at: DateTime<Utc>,
    pub build: BuildInfo,
    pub name: String,
    pub births_by_sex: BTreeMap<u16, SexCounts>,
    pub name_history: BTreeMap<u16, SexCounts>,
    pub sex_share: SexShare,
    pub average_name_length: BTreeMap<u16, f64>,
    pub unique_names: BTreeMap<u16, usize>,
    pub most_popular: BTreeMap<u16, TopNames>,
    pub top_female_shares: Vec<NameShare>,
    pub top_male_shares: Vec<NameShare>,
}

impl NameReport {
    pub fn build(records: &[NameRecord], name: &str) -> Self {
        let most_popular = names::most_popular_by_year(records);

        Self {
            generated_at: Utc::now(),
            build: BuildInfo::current(),
            name: name.to_string(),
            births_by_sex: names::births_by_sex(records),
            name_history: names::name_history(records, name),
            sex_share: names::sex_share(records, name),
            average_name_length: names::average_name_length_by_year(records),
            unique_names: names::unique_names_by_year(records),
            top_female_shares: names::top_name_shares(&most_popular, Sex::Female),
            top_male_shares: names::top_name_shares(&most_popular, Sex::Male),
            most_popular,
        }
    }
}

/// Pretty-print any report to a JSON file
pub fn write_json<T: Serialize, P: AsRef<Path>>(report: &T, path: P) -> AnalysisResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path.as_ref(), json)?;
    tracing::info!("Wrote {}", path.as_ref().display());
    Ok(())
}
