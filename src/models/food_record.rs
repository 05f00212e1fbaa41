//! Food record model
//!
//! A single entry from the nutrition database and its nutrient measurements.

use serde::Serialize;

/// One (description, unit, value) triple from a food's nutrient list.
///
/// Every field is optional: raw entries may omit any key, and an absent key
/// simply never matches a target nutrient. Built by the food loader, which
/// reads raw JSON leniently; there is no derive-based parsing path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutrientMeasurement {
    pub description: Option<String>,
    pub unit: Option<String>,
    pub value: Option<f64>,
}

impl NutrientMeasurement {
    /// Build a fully populated measurement
    pub fn new(description: impl Into<String>, unit: impl Into<String>, value: f64) -> Self {
        Self {
            description: Some(description.into()),
            unit: Some(unit.into()),
            value: Some(value),
        }
    }

    /// The (description, unit) key, if both parts are present
    pub fn key(&self) -> Option<(&str, &str)> {
        match (&self.description, &self.unit) {
            (Some(d), Some(u)) => Some((d.as_str(), u.as_str())),
            _ => None,
        }
    }
}

/// A food item with its raw, unordered nutrient measurements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    pub identifier: String,
    pub nutrients: Vec<NutrientMeasurement>,
}

impl FoodRecord {
    pub fn new(identifier: impl Into<String>, nutrients: Vec<NutrientMeasurement>) -> Self {
        Self {
            identifier: identifier.into(),
            nutrients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_requires_description_and_unit() {
        let full = NutrientMeasurement::new("Protein", "g", 3.0);
        assert_eq!(full.key(), Some(("Protein", "g")));

        let no_unit = NutrientMeasurement {
            description: Some("Protein".to_string()),
            unit: None,
            value: Some(3.0),
        };
        assert_eq!(no_unit.key(), None);

        assert_eq!(NutrientMeasurement::default().key(), None);
    }

    #[test]
    fn test_serializes_unit_under_its_field_name() {
        let json = serde_json::to_value(NutrientMeasurement::new("Protein", "g", 3.0)).unwrap();
        assert_eq!(json["unit"], "g");
        assert!(json.get("units").is_none());
    }
}
