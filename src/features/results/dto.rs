use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::fec::Chamber;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResult {
    pub candidate: String,
    pub party: String,
    pub incumbent: bool,
    pub votes: Option<u64>,
    pub percent: Option<f64>,
    pub winner: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceResult {
    pub chamber: Chamber,
    pub state: String,
    pub district: Option<u8>,
    pub candidates: Vec<CandidateResult>,
    // Name of the winning candidate, if one could be determined.
    pub winner: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CongressFile {
    pub year: u16,
    pub generated_at: DateTime<Utc>,
    pub races: Vec<RaceResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChamberSummary {
    pub chamber: Chamber,
    pub seats_decided: u32,
    pub party_seats: BTreeMap<String, u32>,
    pub total_votes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryFile {
    pub year: u16,
    pub generated_at: DateTime<Utc>,
    pub chambers: Vec<ChamberSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NationalCandidateResult {
    pub candidate: String,
    pub party: String,
    pub popular_votes: u64,
    pub electoral_votes: u32,
    pub winner: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateCandidateResult {
    pub candidate: String,
    pub party: String,
    pub popular_votes: u64,
    pub winner: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateResult {
    pub state: String,
    pub candidates: Vec<StateCandidateResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresidentFile {
    pub year: u16,
    pub generated_at: DateTime<Utc>,
    pub nationwide: Vec<NationalCandidateResult>,
    pub states: Vec<StateResult>,
}
