use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tokio::task;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::features::fec::client::FecClient;
use crate::features::fec::dto::{Chamber, CongressRow, PresidentRow};
use crate::features::results::dto::{
    CandidateResult, ChamberSummary, CongressFile, NationalCandidateResult, PresidentFile,
    RaceResult, StateCandidateResult, StateResult, SummaryFile,
};

#[async_trait]
pub trait ResultsSource: Send + Sync {
    async fn congress_results(&self, year: u16) -> Result<Vec<CongressRow>, AppError>;
    async fn president_results(&self, year: u16) -> Result<Vec<PresidentRow>, AppError>;
}

#[async_trait]
impl ResultsSource for FecClient {
    async fn congress_results(&self, year: u16) -> Result<Vec<CongressRow>, AppError> {
        FecClient::congress_results(self, year).await
    }

    async fn president_results(&self, year: u16) -> Result<Vec<PresidentRow>, AppError> {
        FecClient::president_results(self, year).await
    }
}

// Produces the per-year JSON artifacts. One instance covers exactly one
// election year.
pub struct JsonGenerator {
    year: u16,
    source: Arc<dyn ResultsSource>,
    output_dir: PathBuf,
}

impl JsonGenerator {
    pub fn new(config: &AppConfig, source: Arc<dyn ResultsSource>, year: u16) -> Self {
        Self {
            year,
            source,
            output_dir: PathBuf::from(&config.output_dir),
        }
    }

    pub async fn write_congress(&self) -> Result<PathBuf, AppError> {
        let rows = self.source.congress_results(self.year).await?;
        let file = CongressFile {
            year: self.year,
            generated_at: Utc::now(),
            races: group_races(&rows),
        };
        self.write_artifact("congress.json", &file).await
    }

    pub async fn write_summary(&self) -> Result<PathBuf, AppError> {
        let rows = self.source.congress_results(self.year).await?;
        let file = build_summary_file(self.year, &rows);
        self.write_artifact("summary.json", &file).await
    }

    pub async fn write_president(&self) -> Result<PathBuf, AppError> {
        let rows = self.source.president_results(self.year).await?;
        let file = build_president_file(self.year, &rows);
        self.write_artifact("president.json", &file).await
    }

    async fn write_artifact<T: Serialize>(
        &self,
        name: &str,
        payload: &T,
    ) -> Result<PathBuf, AppError> {
        let dir = self.output_dir.join(self.year.to_string());
        let path = dir.join(name);
        let data = serde_json::to_vec_pretty(payload)
            .map_err(|err| AppError::internal(format!("failed to serialise {name}: {err}")))?;

        let write_path = path.clone();
        task::spawn_blocking(move || -> Result<(), AppError> {
            fs::create_dir_all(&dir).map_err(|err| {
                AppError::internal(format!("failed to create {}: {err}", dir.display()))
            })?;
            fs::write(&write_path, data).map_err(|err| {
                AppError::internal(format!("failed to write {}: {err}", write_path.display()))
            })?;
            Ok(())
        })
        .await
        .map_err(|err| AppError::internal(format!("write task join error: {err}")))??;

        tracing::info!(year = self.year, artifact = name, "wrote results artifact");
        Ok(path)
    }
}

fn group_races(rows: &[CongressRow]) -> Vec<RaceResult> {
    let mut grouped: BTreeMap<(Chamber, String, Option<u8>), Vec<CandidateResult>> =
        BTreeMap::new();

    for row in rows {
        grouped
            .entry((row.chamber, row.state.clone(), row.district))
            .or_default()
            .push(CandidateResult {
                candidate: row.candidate.clone(),
                party: row.party.clone(),
                incumbent: row.incumbent,
                votes: row.general_votes,
                percent: row.general_percent,
                winner: row.winner,
            });
    }

    grouped
        .into_iter()
        .map(|((chamber, state, district), mut candidates)| {
            candidates.sort_by(|a, b| b.votes.cmp(&a.votes));
            let winner = race_winner(&candidates);
            RaceResult {
                chamber,
                state,
                district,
                candidates,
                winner,
            }
        })
        .collect()
}

fn race_winner(candidates: &[CandidateResult]) -> Option<String> {
    // An explicit winner flag from the source takes precedence over the
    // vote-count fallback.
    if let Some(flagged) = candidates.iter().find(|c| c.winner) {
        return Some(flagged.candidate.clone());
    }

    candidates
        .iter()
        .filter(|c| c.votes.is_some())
        .max_by_key(|c| c.votes)
        .map(|c| c.candidate.clone())
}

fn build_summary_file(year: u16, rows: &[CongressRow]) -> SummaryFile {
    let races = group_races(rows);
    let mut chambers: BTreeMap<Chamber, ChamberSummary> = BTreeMap::new();

    for race in &races {
        let entry = chambers
            .entry(race.chamber)
            .or_insert_with(|| ChamberSummary {
                chamber: race.chamber,
                seats_decided: 0,
                party_seats: BTreeMap::new(),
                total_votes: 0,
            });

        entry.total_votes += race
            .candidates
            .iter()
            .filter_map(|candidate| candidate.votes)
            .sum::<u64>();

        if let Some(winner_name) = &race.winner {
            if let Some(winning) = race
                .candidates
                .iter()
                .find(|candidate| &candidate.candidate == winner_name)
            {
                entry.seats_decided += 1;
                *entry.party_seats.entry(winning.party.clone()).or_insert(0) += 1;
            }
        }
    }

    SummaryFile {
        year,
        generated_at: Utc::now(),
        chambers: chambers.into_values().collect(),
    }
}

fn build_president_file(year: u16, rows: &[PresidentRow]) -> PresidentFile {
    let mut states: BTreeMap<String, Vec<StateCandidateResult>> = BTreeMap::new();
    let mut totals: BTreeMap<String, NationalCandidateResult> = BTreeMap::new();

    for row in rows {
        states
            .entry(row.state.clone())
            .or_default()
            .push(StateCandidateResult {
                candidate: row.candidate.clone(),
                party: row.party.clone(),
                popular_votes: row.popular_votes,
                winner: row.winner,
            });

        let entry = totals
            .entry(row.candidate.clone())
            .or_insert_with(|| NationalCandidateResult {
                candidate: row.candidate.clone(),
                party: row.party.clone(),
                popular_votes: 0,
                electoral_votes: 0,
                winner: false,
            });
        entry.popular_votes += row.popular_votes;
        entry.electoral_votes += row.electoral_votes.unwrap_or(0);
    }

    let mut nationwide: Vec<NationalCandidateResult> = totals.into_values().collect();
    nationwide.sort_by(|a, b| {
        (b.electoral_votes, b.popular_votes).cmp(&(a.electoral_votes, a.popular_votes))
    });
    if let Some(leader) = nationwide.first_mut() {
        leader.winner = true;
    }

    let states = states
        .into_iter()
        .map(|(state, mut candidates)| {
            candidates.sort_by(|a, b| b.popular_votes.cmp(&a.popular_votes));
            StateResult { state, candidates }
        })
        .collect();

    PresidentFile {
        year,
        generated_at: Utc::now(),
        nationwide,
        states,
    }
}
