//! Baby name file loader
//!
//! The dataset ships one `yob{year}.txt` file per year, each line a
//! comma-separated `Name,Sex,Count` row with no header.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{NameRecord, Sex};

/// File name for a given year
pub fn year_file_name(year: u16) -> String {
    format!("yob{}.txt", year)
}

/// Parse the contents of one yearly file. Blank lines are skipped.
pub fn parse_year_file(year: u16, contents: &str) -> AnalysisResult<Vec<NameRecord>> {
    let mut records = Vec::new();

    for (i, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let invalid = |reason: String| AnalysisError::InvalidNameRow {
            year,
            line: i + 1,
            reason,
        };

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [name, sex, count] = fields.as_slice() else {
            return Err(invalid(format!("expected 3 fields, found {}", fields.len())));
        };

        if name.is_empty() {
            return Err(invalid("empty name".to_string()));
        }
        let sex = Sex::from_code(sex).ok_or_else(|| invalid(format!("unknown sex '{}'", sex)))?;
        let count = count
            .parse::<u64>()
            .map_err(|e| invalid(format!("bad count '{}': {}", count, e)))?;

        records.push(NameRecord {
            name: name.to_string(),
            sex,
            count,
            year,
        });
    }

    Ok(records)
}

/// Load every year in `years` from `dir`, concatenated in year order
pub fn load_years<P: AsRef<Path>>(dir: P, years: RangeInclusive<u16>) -> AnalysisResult<Vec<NameRecord>> {
    let dir = dir.as_ref();
    let mut records = Vec::new();

    for year in years {
        let path: PathBuf = dir.join(year_file_name(year));
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            e
        })?;
        let rows = parse_year_file(year, &contents)?;
        tracing::debug!("{}: {} rows", year, rows.len());
        records.extend(rows);
    }

    tracing::info!("Loaded {} name records from {}", records.len(), dir.display());
    Ok(records)
}
