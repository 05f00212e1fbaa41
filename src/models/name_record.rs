//! Baby name model
//!
//! One row of the yearly name frequency files.

use serde::{Deserialize, Serialize};

/// Sex as recorded in the name files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "F",
            Sex::Male => "M",
        }
    }

    /// Parse the single-letter code used in the source files
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim() {
            "F" => Some(Sex::Female),
            "M" => Some(Sex::Male),
            _ => None,
        }
    }
}

/// Number of babies given a name in one year, for one sex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub sex: Sex,
    pub count: u64,
    pub year: u16,
}

/// Counts split by sex
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexCounts {
    pub female: u64,
    pub male: u64,
}

impl SexCounts {
    pub fn get(&self, sex: Sex) -> u64 {
        match sex {
            Sex::Female => self.female,
            Sex::Male => self.male,
        }
    }

    pub fn add(&mut self, sex: Sex, count: u64) {
        match sex {
            Sex::Female => self.female += count,
            Sex::Male => self.male += count,
        }
    }

    pub fn total(&self) -> u64 {
        self.female + self.male
    }
}
