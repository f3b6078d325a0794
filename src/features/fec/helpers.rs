use crate::core::error::AppError;
use crate::features::fec::dto::{
    Chamber, CongressRow, PresidentRow, RawCongressRow, RawPresidentRow,
};

pub fn parse_congress_csv(body: &str) -> Result<Vec<CongressRow>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawCongressRow>() {
        let raw =
            result.map_err(|err| AppError::parse(format!("malformed congress row: {err}")))?;
        rows.push(convert_congress_row(raw)?);
    }

    Ok(rows)
}

pub fn parse_president_csv(body: &str) -> Result<Vec<PresidentRow>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawPresidentRow>() {
        let raw =
            result.map_err(|err| AppError::parse(format!("malformed president row: {err}")))?;
        rows.push(convert_president_row(raw)?);
    }

    Ok(rows)
}

fn convert_congress_row(raw: RawCongressRow) -> Result<CongressRow, AppError> {
    let chamber = Chamber::parse(&raw.chamber)?;
    let candidate = raw.candidate.trim();
    if candidate.is_empty() {
        return Err(AppError::parse(
            "congress row missing candidate name".to_string(),
        ));
    }

    Ok(CongressRow {
        chamber,
        state: raw.state.trim().to_ascii_uppercase(),
        district: parse_district(&raw.district, chamber)?,
        candidate: candidate.to_string(),
        party: normalise_party(&raw.party),
        incumbent: parse_flag(&raw.incumbent),
        general_votes: parse_vote_count(&raw.general_votes)?,
        general_percent: parse_percent(&raw.general_percent)?,
        winner: parse_flag(&raw.winner),
    })
}

fn convert_president_row(raw: RawPresidentRow) -> Result<PresidentRow, AppError> {
    let candidate = raw.candidate.trim();
    if candidate.is_empty() {
        return Err(AppError::parse(
            "president row missing candidate name".to_string(),
        ));
    }

    let popular_votes = parse_vote_count(&raw.popular_votes)?.ok_or_else(|| {
        AppError::parse(format!("president row for {candidate} missing popular votes"))
    })?;

    let electoral_votes = match parse_vote_count(&raw.electoral_votes)? {
        Some(value) => Some(u32::try_from(value).map_err(|err| {
            AppError::parse(format!("invalid electoral vote count {value}: {err}"))
        })?),
        None => None,
    };

    Ok(PresidentRow {
        state: raw.state.trim().to_ascii_uppercase(),
        candidate: candidate.to_string(),
        party: normalise_party(&raw.party),
        popular_votes,
        electoral_votes,
        winner: parse_flag(&raw.winner),
    })
}

fn parse_district(value: &str, chamber: Chamber) -> Result<Option<u8>, AppError> {
    match chamber {
        Chamber::Senate => Ok(None),
        Chamber::House => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(AppError::parse("house row missing district".to_string()));
            }
            trimmed
                .parse::<u8>()
                .map(Some)
                .map_err(|err| AppError::parse(format!("invalid district {trimmed}: {err}")))
        }
    }
}

// FEC vote columns carry thousands separators; empty means no general-election
// contest for the row.
fn parse_vote_count(value: &str) -> Result<Option<u64>, AppError> {
    let cleaned: String = value.trim().chars().filter(|ch| *ch != ',').collect();
    if cleaned.is_empty() {
        return Ok(None);
    }

    cleaned
        .parse::<u64>()
        .map(Some)
        .map_err(|err| AppError::parse(format!("invalid vote count {value}: {err}")))
}

fn parse_percent(value: &str) -> Result<Option<f64>, AppError> {
    let cleaned = value.trim().trim_end_matches('%').trim();
    if cleaned.is_empty() {
        return Ok(None);
    }

    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|err| AppError::parse(format!("invalid percentage {value}: {err}")))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_uppercase().as_str(),
        "W" | "Y" | "YES" | "TRUE" | "1" | "*"
    )
}

fn normalise_party(value: &str) -> String {
    let cleaned = value.trim().to_ascii_uppercase();
    if cleaned.is_empty() {
        "UNKNOWN".to_string()
    } else {
        cleaned
    }
}
