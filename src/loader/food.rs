//! Food database loader
//!
//! Reads the USDA JSON export: an array of entries, each with a
//! `description` and a `nutrients` list of `{description, unit|units, value}`.

use std::path::Path;

use serde_json::Value;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{FoodRecord, NutrientMeasurement};

/// Records that loaded, plus the entries that were rejected
#[derive(Debug, Default)]
pub struct FoodLoad {
    pub records: Vec<FoodRecord>,
    pub rejected: Vec<AnalysisError>,
}

/// Read a nutrient dictionary. Missing or mistyped keys become `None`.
/// The export's `units` key wins over `unit` when both are present.
fn measurement_from_value(value: &Value) -> NutrientMeasurement {
    let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

    NutrientMeasurement {
        description: text("description"),
        unit: text("units").or_else(|| text("unit")),
        value: value.get("value").and_then(Value::as_f64),
    }
}

/// Convert one raw entry into a FoodRecord
pub fn record_from_value(index: usize, entry: &Value) -> AnalysisResult<FoodRecord> {
    let invalid = |reason: &str| AnalysisError::InvalidRecord {
        index,
        reason: reason.to_string(),
    };

    if !entry.is_object() {
        return Err(invalid("entry is not an object"));
    }

    let identifier = match entry.get("description").and_then(Value::as_str) {
        Some(d) if !d.trim().is_empty() => d.to_string(),
        Some(_) => return Err(invalid("description is empty")),
        None => return Err(invalid("missing description")),
    };

    let nutrients = match entry.get("nutrients") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(measurement_from_value).collect(),
        Some(_) => return Err(invalid("nutrients is not a list")),
    };

    Ok(FoodRecord::new(identifier, nutrients))
}

/// Parse the JSON export. Bad entries are logged and collected, the rest load.
pub fn parse_food_records(json: &str) -> AnalysisResult<FoodLoad> {
    let root: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = root else {
        return Err(AnalysisError::InvalidInput(
            "food database must be a JSON array".to_string(),
        ));
    };

    let mut load = FoodLoad::default();
    for (index, entry) in entries.iter().enumerate() {
        match record_from_value(index, entry) {
            Ok(record) => load.records.push(record),
            Err(e) => {
                tracing::warn!("Skipping food entry: {}", e);
                load.rejected.push(e);
            }
        }
    }

    tracing::info!(
        "Loaded {} food records ({} rejected)",
        load.records.len(),
        load.rejected.len()
    );
    Ok(load)
}

/// Read and parse the food database file
pub fn load_food_records<P: AsRef<Path>>(path: P) -> AnalysisResult<FoodLoad> {
    let path = path.as_ref();
    tracing::debug!("Reading food database from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    parse_food_records(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "description": "Pillsbury Golden Layer Buttermilk Biscuits",
            "nutrients": [
                {"description": "Protein", "units": "g", "value": 5.88},
                {"description": "Energy", "units": "kcal", "value": 307}
            ],
            "portions": [{"amount": 1, "unit": "serving", "grams": 34}]
        },
        {
            "description": "Tofu, raw",
            "nutrients": [
                {"description": "Protein", "unit": "g", "value": 8.08},
                {"description": "Fiber", "value": null},
                {"units": "g", "value": "lots"}
            ]
        },
        {"nutrients": [{"description": "Protein", "units": "g", "value": 1}]},
        {"description": "   ", "nutrients": []},
        {"description": "Water"},
        42
    ]"#;

    #[test]
    fn test_parse_accepts_unit_and_units() {
        let load = parse_food_records(SAMPLE).unwrap();
        let biscuit = &load.records[0];
        assert_eq!(biscuit.identifier, "Pillsbury Golden Layer Buttermilk Biscuits");
        assert_eq!(biscuit.nutrients[1], NutrientMeasurement::new("Energy", "kcal", 307.0));
        assert_eq!(load.records[1].nutrients[0].unit.as_deref(), Some("g"));
    }

    #[test]
    fn test_units_key_wins_over_unit() {
        let entry = serde_json::json!({
            "description": "Energy",
            "units": "kcal",
            "unit": "kJ",
            "value": 120
        });
        let measurement = measurement_from_value(&entry);
        assert_eq!(measurement.unit.as_deref(), Some("kcal"));
        assert_eq!(measurement.key(), Some(("Energy", "kcal")));
    }

    #[test]
    fn test_parse_tolerates_missing_and_mistyped_keys() {
        let load = parse_food_records(SAMPLE).unwrap();
        let tofu = &load.records[1];
        assert_eq!(tofu.nutrients.len(), 3);
        assert_eq!(tofu.nutrients[1].unit, None);
        assert_eq!(tofu.nutrients[1].value, None);
        assert_eq!(tofu.nutrients[2].description, None);
        assert_eq!(tofu.nutrients[2].value, None);
    }

    #[test]
    fn test_parse_rejects_bad_entries_and_keeps_rest() {
        let load = parse_food_records(SAMPLE).unwrap();
        let ids: Vec<_> = load.records.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(
            ids,
            vec!["Pillsbury Golden Layer Buttermilk Biscuits", "Tofu, raw", "Water"]
        );
        assert!(load.records[2].nutrients.is_empty());

        let rejected: Vec<_> = load
            .rejected
            .iter()
            .map(|e| match e {
                AnalysisError::InvalidRecord { index, .. } => *index,
                other => panic!("unexpected error: {other}"),
            })
            .collect();
        assert_eq!(rejected, vec![2, 3, 5]);
    }

    #[test]
    fn test_parse_requires_array() {
        let err = parse_food_records(r#"{"description": "x"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));

        let err = parse_food_records("not json").unwrap_err();
        assert!(matches!(err, AnalysisError::Json(_)));
    }

    #[test]
    fn test_nutrients_must_be_a_list() {
        let entry: Value = serde_json::json!({"description": "Egg", "nutrients": "none"});
        let err = record_from_value(7, &entry).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidRecord { index: 7, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let load = load_food_records(file.path()).unwrap();
        assert_eq!(load.records.len(), 3);
        assert_eq!(load.rejected.len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_food_records(dir.path().join("database.json")).unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
