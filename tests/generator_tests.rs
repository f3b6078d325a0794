use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use fec_results_generator::config::AppConfig;
use fec_results_generator::core::error::AppError;
use fec_results_generator::features::fec::{Chamber, CongressRow, PresidentRow};
use fec_results_generator::features::results::{
    CongressFile, JsonGenerator, PresidentFile, ResultsSource, SummaryFile,
};

struct MockResultsSource {
    congress: Vec<CongressRow>,
    president: Vec<PresidentRow>,
    fail: bool,
}

#[async_trait]
impl ResultsSource for MockResultsSource {
    async fn congress_results(&self, _year: u16) -> Result<Vec<CongressRow>, AppError> {
        if self.fail {
            return Err(AppError::upstream("dataset unavailable".to_string()));
        }
        Ok(self.congress.clone())
    }

    async fn president_results(&self, _year: u16) -> Result<Vec<PresidentRow>, AppError> {
        if self.fail {
            return Err(AppError::upstream("dataset unavailable".to_string()));
        }
        Ok(self.president.clone())
    }
}

fn test_config(output_dir: &Path) -> AppConfig {
    AppConfig {
        base_url: "https://example.invalid/fec".to_string(),
        output_dir: output_dir.to_string_lossy().to_string(),
        cache_dir: output_dir.join("cache").to_string_lossy().to_string(),
        cache_enabled: false,
        cache_ttl_secs: 60,
        disable_proxy: false,
    }
}

fn congress_fixture() -> Vec<CongressRow> {
    vec![
        CongressRow {
            chamber: Chamber::House,
            state: "CA".to_string(),
            district: Some(1),
            candidate: "Alice Example".to_string(),
            party: "DEM".to_string(),
            incumbent: true,
            general_votes: Some(120_456),
            general_percent: Some(52.4),
            winner: true,
        },
        CongressRow {
            chamber: Chamber::House,
            state: "CA".to_string(),
            district: Some(1),
            candidate: "Bob Sample".to_string(),
            party: "REP".to_string(),
            incumbent: false,
            general_votes: Some(109_321),
            general_percent: Some(47.6),
            winner: false,
        },
        // Senate race without an explicit winner flag: the vote-count
        // fallback decides it.
        CongressRow {
            chamber: Chamber::Senate,
            state: "GA".to_string(),
            district: None,
            candidate: "Carol Test".to_string(),
            party: "REP".to_string(),
            incumbent: false,
            general_votes: Some(2_345_678),
            general_percent: Some(51.1),
            winner: false,
        },
        CongressRow {
            chamber: Chamber::Senate,
            state: "GA".to_string(),
            district: None,
            candidate: "Dan Fixture".to_string(),
            party: "DEM".to_string(),
            incumbent: false,
            general_votes: Some(2_245_000),
            general_percent: Some(48.9),
            winner: false,
        },
    ]
}

fn president_fixture() -> Vec<PresidentRow> {
    vec![
        PresidentRow {
            state: "OH".to_string(),
            candidate: "Grant Example".to_string(),
            party: "REP".to_string(),
            popular_votes: 2_841_005,
            electoral_votes: Some(20),
            winner: true,
        },
        PresidentRow {
            state: "OH".to_string(),
            candidate: "Hayes Sample".to_string(),
            party: "DEM".to_string(),
            popular_votes: 2_741_165,
            electoral_votes: None,
            winner: false,
        },
        PresidentRow {
            state: "PA".to_string(),
            candidate: "Grant Example".to_string(),
            party: "REP".to_string(),
            popular_votes: 2_900_000,
            electoral_votes: Some(21),
            winner: true,
        },
        PresidentRow {
            state: "PA".to_string(),
            candidate: "Hayes Sample".to_string(),
            party: "DEM".to_string(),
            popular_votes: 2_850_000,
            electoral_votes: None,
            winner: false,
        },
    ]
}

fn make_generator(output_dir: &Path, year: u16, fail: bool) -> JsonGenerator {
    let config = test_config(output_dir);
    let source: Arc<dyn ResultsSource> = Arc::new(MockResultsSource {
        congress: congress_fixture(),
        president: president_fixture(),
        fail,
    });
    JsonGenerator::new(&config, source, year)
}

#[tokio::test]
async fn congress_artifact_groups_candidates_into_races() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let generator = make_generator(temp_dir.path(), 2000, false);

    let path = generator.write_congress().await.expect("write congress");
    assert_eq!(path, temp_dir.path().join("2000").join("congress.json"));

    let bytes = fs::read(&path).expect("read artifact");
    let file: CongressFile = serde_json::from_slice(&bytes).expect("decode artifact");

    assert_eq!(file.year, 2000);
    assert_eq!(file.races.len(), 2);

    let house = file
        .races
        .iter()
        .find(|race| race.chamber == Chamber::House)
        .expect("house race");
    assert_eq!(house.state, "CA");
    assert_eq!(house.district, Some(1));
    assert_eq!(house.candidates.len(), 2);
    assert_eq!(house.winner.as_deref(), Some("Alice Example"));
    // candidates sorted by general-election votes, highest first
    assert_eq!(house.candidates[0].candidate, "Alice Example");

    let senate = file
        .races
        .iter()
        .find(|race| race.chamber == Chamber::Senate)
        .expect("senate race");
    assert_eq!(senate.district, None);
    assert_eq!(senate.winner.as_deref(), Some("Carol Test"));
}

#[tokio::test]
async fn summary_counts_seats_and_votes_per_chamber() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let generator = make_generator(temp_dir.path(), 2002, false);

    let path = generator.write_summary().await.expect("write summary");
    assert_eq!(path, temp_dir.path().join("2002").join("summary.json"));

    let bytes = fs::read(&path).expect("read artifact");
    let file: SummaryFile = serde_json::from_slice(&bytes).expect("decode artifact");

    assert_eq!(file.year, 2002);
    assert_eq!(file.chambers.len(), 2);

    let house = file
        .chambers
        .iter()
        .find(|chamber| chamber.chamber == Chamber::House)
        .expect("house summary");
    assert_eq!(house.seats_decided, 1);
    assert_eq!(house.party_seats.get("DEM"), Some(&1));
    assert_eq!(house.total_votes, 120_456 + 109_321);

    let senate = file
        .chambers
        .iter()
        .find(|chamber| chamber.chamber == Chamber::Senate)
        .expect("senate summary");
    assert_eq!(senate.seats_decided, 1);
    assert_eq!(senate.party_seats.get("REP"), Some(&1));
    assert_eq!(senate.total_votes, 2_345_678 + 2_245_000);
}

#[tokio::test]
async fn president_artifact_aggregates_nationwide_totals() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let generator = make_generator(temp_dir.path(), 2004, false);

    let path = generator.write_president().await.expect("write president");
    assert_eq!(path, temp_dir.path().join("2004").join("president.json"));

    let bytes = fs::read(&path).expect("read artifact");
    let file: PresidentFile = serde_json::from_slice(&bytes).expect("decode artifact");

    assert_eq!(file.year, 2004);
    assert_eq!(file.nationwide.len(), 2);

    let leader = &file.nationwide[0];
    assert_eq!(leader.candidate, "Grant Example");
    assert_eq!(leader.popular_votes, 2_841_005 + 2_900_000);
    assert_eq!(leader.electoral_votes, 41);
    assert!(leader.winner);
    assert!(!file.nationwide[1].winner);

    assert_eq!(file.states.len(), 2);
    let ohio = file
        .states
        .iter()
        .find(|state| state.state == "OH")
        .expect("ohio results");
    assert_eq!(ohio.candidates[0].candidate, "Grant Example");
    assert!(ohio.candidates[0].winner);
}

#[tokio::test]
async fn source_failure_propagates() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let generator = make_generator(temp_dir.path(), 2000, true);

    let result = generator.write_congress().await;
    assert!(matches!(result, Err(AppError::Upstream(_))));

    // nothing written when the fetch fails
    assert!(!temp_dir.path().join("2000").join("congress.json").exists());
}
