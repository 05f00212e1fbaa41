//! Name trend aggregations
//!
//! Year-by-year aggregates over the baby name records.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::{NameRecord, Sex, SexCounts};

/// Total births per year, split by sex
pub fn births_by_sex(records: &[NameRecord]) -> BTreeMap<u16, SexCounts> {
    let mut by_year: BTreeMap<u16, SexCounts> = BTreeMap::new();
    for record in records {
        by_year.entry(record.year).or_default().add(record.sex, record.count);
    }
    by_year
}

/// One name's births per year, split by sex.
///
/// Every year present in `records` gets an entry; years where the name was
/// not given are all zeros.
pub fn name_history(records: &[NameRecord], name: &str) -> BTreeMap<u16, SexCounts> {
    let mut by_year: BTreeMap<u16, SexCounts> = records
        .iter()
        .map(|r| (r.year, SexCounts::default()))
        .collect();

    for record in records.iter().filter(|r| r.name == name) {
        by_year.entry(record.year).or_default().add(record.sex, record.count);
    }
    by_year
}

/// How a name's births divide between the sexes across all years
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SexShare {
    pub name: String,
    pub counts: SexCounts,
    pub female_pct: f64,
    pub male_pct: f64,
}

pub fn sex_share(records: &[NameRecord], name: &str) -> SexShare {
    let mut counts = SexCounts::default();
    for record in records.iter().filter(|r| r.name == name) {
        counts.add(record.sex, record.count);
    }

    let total = counts.total();
    let pct = |n: u64| if total == 0 { 0.0 } else { n as f64 / total as f64 * 100.0 };

    SexShare {
        name: name.to_string(),
        female_pct: pct(counts.female),
        male_pct: pct(counts.male),
        counts,
    }
}

/// Average name length per year, weighted by the number of births
pub fn average_name_length_by_year(records: &[NameRecord]) -> BTreeMap<u16, f64> {
    // year -> (sum of count * length, sum of count)
    let mut totals: BTreeMap<u16, (u64, u64)> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.year).or_default();
        entry.0 += record.count * record.name.chars().count() as u64;
        entry.1 += record.count;
    }

    totals
        .into_iter()
        .filter(|(_, (_, births))| *births > 0)
        .map(|(year, (weighted, births))| (year, weighted as f64 / births as f64))
        .collect()
}

/// Number of (name, sex) rows recorded per year.
///
/// A name given to both sexes counts twice, matching one row per sex in
/// the source files.
pub fn unique_names_by_year(records: &[NameRecord]) -> BTreeMap<u16, usize> {
    let mut seen: BTreeMap<u16, BTreeSet<(&str, Sex)>> = BTreeMap::new();
    for record in records {
        seen.entry(record.year)
            .or_default()
            .insert((record.name.as_str(), record.sex));
    }
    seen.into_iter().map(|(year, names)| (year, names.len())).collect()
}

/// The most given name for each sex in one year
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopNames {
    pub female: Option<String>,
    pub male: Option<String>,
}

impl TopNames {
    pub fn get(&self, sex: Sex) -> Option<&str> {
        match sex {
            Sex::Female => self.female.as_deref(),
            Sex::Male => self.male.as_deref(),
        }
    }
}

/// Most popular name per sex for every year; ties go to the earlier record
pub fn most_popular_by_year(records: &[NameRecord]) -> BTreeMap<u16, TopNames> {
    let mut best: BTreeMap<(u16, Sex), &NameRecord> = BTreeMap::new();
    for record in records {
        best.entry((record.year, record.sex))
            .and_modify(|current| {
                if record.count > current.count {
                    *current = record;
                }
            })
            .or_insert(record);
    }

    let mut by_year: BTreeMap<u16, TopNames> = BTreeMap::new();
    for ((year, sex), record) in best {
        let top = by_year.entry(year).or_default();
        match sex {
            Sex::Female => top.female = Some(record.name.clone()),
            Sex::Male => top.male = Some(record.name.clone()),
        }
    }
    by_year
}

/// Share of years a name spent as the most popular for its sex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameShare {
    pub name: String,
    pub years: usize,
    pub pct: f64,
}

/// Distinct top names for `sex`, in order of first appearance, with the
/// percentage of years each held the top spot
pub fn top_name_shares(popular: &BTreeMap<u16, TopNames>, sex: Sex) -> Vec<NameShare> {
    let tops: Vec<&str> = popular.values().filter_map(|t| t.get(sex)).collect();
    let total = tops.len();

    let mut shares: Vec<NameShare> = Vec::new();
    for name in tops {
        match shares.iter_mut().find(|s| s.name == name) {
            Some(share) => share.years += 1,
            None => shares.push(NameShare {
                name: name.to_string(),
                years: 1,
                pct: 0.0,
            }),
        }
    }

    for share in &mut shares {
        share.pct = share.years as f64 / total as f64 * 100.0;
    }
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, sex: Sex, count: u64, year: u16) -> NameRecord {
        NameRecord {
            name: name.to_string(),
            sex,
            count,
            year,
        }
    }

    fn fixture() -> Vec<NameRecord> {
        vec![
            rec("Mary", Sex::Female, 7065, 1880),
            rec("Anna", Sex::Female, 2604, 1880),
            rec("Andrew", Sex::Female, 5, 1880),
            rec("John", Sex::Male, 9655, 1880),
            rec("Andrew", Sex::Male, 644, 1880),
            rec("Mary", Sex::Female, 6919, 1881),
            rec("John", Sex::Male, 8769, 1881),
            rec("William", Sex::Male, 8524, 1881),
            rec("Emma", Sex::Female, 2000, 1882),
            rec("Liam", Sex::Male, 2000, 1882),
            rec("Noah", Sex::Male, 2000, 1882),
            rec("Andrew", Sex::Male, 10, 1882),
        ]
    }

    #[test]
    fn test_births_by_sex() {
        let births = births_by_sex(&fixture());
        assert_eq!(births[&1880], SexCounts { female: 9674, male: 10299 });
        assert_eq!(births[&1881], SexCounts { female: 6919, male: 17293 });
        assert_eq!(births[&1882], SexCounts { female: 2000, male: 4010 });
    }

    #[test]
    fn test_name_history_fills_missing_years() {
        let history = name_history(&fixture(), "Andrew");
        assert_eq!(history.len(), 3);
        assert_eq!(history[&1880], SexCounts { female: 5, male: 644 });
        assert_eq!(history[&1881], SexCounts::default());
        assert_eq!(history[&1882], SexCounts { female: 0, male: 10 });
    }

    #[test]
    fn test_sex_share() {
        let share = sex_share(&fixture(), "Andrew");
        assert_eq!(share.counts, SexCounts { female: 5, male: 654 });
        assert!((share.female_pct - 5.0 / 659.0 * 100.0).abs() < 1e-9);
        assert!((share.female_pct + share.male_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_sex_share_unknown_name() {
        let share = sex_share(&fixture(), "Zebulon");
        assert_eq!(share.counts.total(), 0);
        assert_eq!(share.female_pct, 0.0);
        assert_eq!(share.male_pct, 0.0);
    }

    #[test]
    fn test_average_name_length_is_birth_weighted() {
        let averages = average_name_length_by_year(&fixture());
        // 1882: Emma(4)*2000 + Liam(4)*2000 + Noah(4)*2000 + Andrew(6)*10
        let expected = (4.0 * 6000.0 + 6.0 * 10.0) / 6010.0;
        assert!((averages[&1882] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_unique_names_counts_each_sex() {
        let unique = unique_names_by_year(&fixture());
        assert_eq!(unique[&1880], 5);
        assert_eq!(unique[&1881], 3);
        assert_eq!(unique[&1882], 4);
    }

    #[test]
    fn test_most_popular_ties_go_to_first_record() {
        let popular = most_popular_by_year(&fixture());
        assert_eq!(popular[&1880].female.as_deref(), Some("Mary"));
        assert_eq!(popular[&1880].male.as_deref(), Some("John"));
        assert_eq!(popular[&1882].male.as_deref(), Some("Liam"));
    }

    #[test]
    fn test_most_popular_missing_sex_is_none() {
        let records = vec![rec("Mary", Sex::Female, 10, 1900)];
        let popular = most_popular_by_year(&records);
        assert_eq!(popular[&1900].male, None);
        assert_eq!(popular[&1900].get(Sex::Female), Some("Mary"));
    }

    #[test]
    fn test_top_name_shares_in_order_of_first_appearance() {
        let popular = most_popular_by_year(&fixture());
        let male = top_name_shares(&popular, Sex::Male);
        assert_eq!(male.len(), 2);
        assert_eq!(male[0].name, "John");
        assert_eq!(male[0].years, 2);
        assert!((male[0].pct - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(male[1].name, "Liam");

        let female = top_name_shares(&popular, Sex::Female);
        assert_eq!(female.iter().map(|s| s.years).sum::<usize>(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(births_by_sex(&[]).is_empty());
        assert!(average_name_length_by_year(&[]).is_empty());
        assert!(top_name_shares(&BTreeMap::new(), Sex::Male).is_empty());
    }
}
