use serde::{Deserialize, Serialize};

use crate::core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "H" | "HOUSE" => Ok(Self::House),
            "S" | "SENATE" => Ok(Self::Senate),
            other => Err(AppError::parse(format!("unknown chamber: {other}"))),
        }
    }
}

// Raw shape of <base>/<year>/congress.csv before cleanup.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCongressRow {
    pub chamber: String,
    pub state: String,
    #[serde(default)]
    pub district: String,
    pub candidate: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub incumbent: String,
    #[serde(default)]
    pub general_votes: String,
    #[serde(default)]
    pub general_percent: String,
    #[serde(default)]
    pub winner: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CongressRow {
    pub chamber: Chamber,
    pub state: String,
    // House district number (0 for at-large seats), None for Senate rows.
    pub district: Option<u8>,
    pub candidate: String,
    pub party: String,
    pub incumbent: bool,
    pub general_votes: Option<u64>,
    pub general_percent: Option<f64>,
    pub winner: bool,
}

// Raw shape of <base>/<year>/president.csv before cleanup.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPresidentRow {
    pub state: String,
    pub candidate: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub popular_votes: String,
    #[serde(default)]
    pub electoral_votes: String,
    #[serde(default)]
    pub winner: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresidentRow {
    pub state: String,
    pub candidate: String,
    pub party: String,
    pub popular_votes: u64,
    pub electoral_votes: Option<u32>,
    pub winner: bool,
}
