//! Runtime configuration
//!
//! Paths and year range come from environment variables, falling back to a
//! `data/` directory at the project root.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, AnalysisResult};

pub const ENV_FOOD_DB: &str = "FOODDATA_FOOD_DB";
pub const ENV_NAMES_DIR: &str = "FOODDATA_NAMES_DIR";
pub const ENV_OUTPUT_DIR: &str = "FOODDATA_OUTPUT_DIR";
pub const ENV_YEAR_START: &str = "FOODDATA_YEAR_START";
pub const ENV_YEAR_END: &str = "FOODDATA_YEAR_END";

/// First and last year covered by the name dataset
pub const DEFAULT_YEAR_START: u16 = 1880;
pub const DEFAULT_YEAR_END: u16 = 2017;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub food_db_path: PathBuf,
    pub names_dir: PathBuf,
    pub output_dir: PathBuf,
    pub year_start: u16,
    pub year_end: u16,
}

/// Project root: the executable's directory, stepping out of target/{debug,release}
fn project_root() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(Path::parent) {
            path = grandparent.to_path_buf();
        }
    }
    path
}

impl Config {
    /// Defaults rooted at `root`
    pub fn with_root(root: &Path) -> Self {
        let data = root.join("data");
        Self {
            food_db_path: data.join("database.json"),
            names_dir: data.join("nameData"),
            output_dir: data.join("output"),
            year_start: DEFAULT_YEAR_START,
            year_end: DEFAULT_YEAR_END,
        }
    }

    /// Build from the process environment
    pub fn from_env() -> AnalysisResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> AnalysisResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::with_root(&project_root());

        if let Some(path) = lookup(ENV_FOOD_DB) {
            config.food_db_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_NAMES_DIR) {
            config.names_dir = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_OUTPUT_DIR) {
            config.output_dir = PathBuf::from(path);
        }
        if let Some(year) = lookup(ENV_YEAR_START) {
            config.year_start = parse_year(ENV_YEAR_START, &year)?;
        }
        if let Some(year) = lookup(ENV_YEAR_END) {
            config.year_end = parse_year(ENV_YEAR_END, &year)?;
        }

        if config.year_start > config.year_end {
            return Err(AnalysisError::Config(format!(
                "year range is empty: {}..={}",
                config.year_start, config.year_end
            )));
        }

        Ok(config)
    }

    pub fn years(&self) -> RangeInclusive<u16> {
        self.year_start..=self.year_end
    }
}

fn parse_year(key: &str, value: &str) -> AnalysisResult<u16> {
    value
        .trim()
        .parse()
        .map_err(|e| AnalysisError::Config(format!("{} must be a year, got '{}': {}", key, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_under_data_dir() {
        let config = Config::with_root(Path::new("/srv/fooddata"));
        assert_eq!(config.food_db_path, PathBuf::from("/srv/fooddata/data/database.json"));
        assert_eq!(config.names_dir, PathBuf::from("/srv/fooddata/data/nameData"));
        assert_eq!(config.years(), 1880..=2017);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_FOOD_DB, "/tmp/db.json"),
            (ENV_OUTPUT_DIR, "/tmp/out"),
            (ENV_YEAR_START, "1990"),
            (ENV_YEAR_END, " 2000 "),
        ]))
        .unwrap();
        assert_eq!(config.food_db_path, PathBuf::from("/tmp/db.json"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.years(), 1990..=2000);
    }

    #[test]
    fn test_bad_year_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[(ENV_YEAR_START, "eighteen eighty")])).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[(ENV_YEAR_START, "2010"), (ENV_YEAR_END, "2000")]))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }
}
