use crate::engine::classifier::ClassificationResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Optional response fields a caller may select for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Numbers,
    Alphabets,
    HighestAlphabet,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field '{0}' (expected numbers, alphabets or highest_alphabet)")]
pub struct FieldParseError(pub String);

impl Field {
    pub const ALL: [Field; 3] = [Field::Numbers, Field::Alphabets, Field::HighestAlphabet];

    pub fn name(self) -> &'static str {
        match self {
            Field::Numbers => "numbers",
            Field::Alphabets => "alphabets",
            Field::HighestAlphabet => "highest_alphabet",
        }
    }

    /// Human label used by the multi-select list.
    pub fn label(self) -> &'static str {
        match self {
            Field::Numbers => "Numbers",
            Field::Alphabets => "Alphabets",
            Field::HighestAlphabet => "Highest alphabet",
        }
    }

    pub fn extract(self, result: &ClassificationResult) -> &[String] {
        match self {
            Field::Numbers => &result.numbers,
            Field::Alphabets => &result.alphabets,
            Field::HighestAlphabet => &result.highest_alphabet,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "numbers" => Ok(Field::Numbers),
            "alphabets" => Ok(Field::Alphabets),
            "highest_alphabet" | "highestalphabet" => Ok(Field::HighestAlphabet),
            _ => Err(FieldParseError(s.to_string())),
        }
    }
}
