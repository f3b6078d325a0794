use std::env;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;

const DEFAULT_BASE_URL: &str = "https://www.fec.gov/files/federalelections";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let base_url = env::var("FEC_RESULTS_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();
    if base_url.is_empty() {
        return Err(AppError::configuration(
            "FEC_RESULTS_BASE_URL must not be empty".to_string(),
        ));
    }

    let output_dir = env::var("FEC_OUTPUT_DIR").unwrap_or_else(|_| "results".to_string());
    let cache_dir = env::var("FEC_CACHE_DIR").unwrap_or_else(|_| ".fec-cache".to_string());
    let cache_enabled = parse_bool_env("CACHE_ENABLED", true)?;
    let disable_proxy = parse_bool_env("FEC_DISABLE_PROXY", false)?;

    let cache_ttl_secs = env::var("CACHE_TTL_SECS")
        .unwrap_or_else(|_| "86400".to_string())
        .parse::<u64>()
        .map_err(|err| AppError::configuration(format!("invalid CACHE_TTL_SECS: {err}")))?;

    Ok(AppConfig {
        base_url,
        output_dir,
        cache_dir,
        cache_enabled,
        cache_ttl_secs,
        disable_proxy,
    })
}

fn parse_bool_env(key: &str, default: bool) -> Result<bool, AppError> {
    match env::var(key) {
        Ok(value) => match value.as_str() {
            "true" | "1" | "TRUE" | "True" => Ok(true),
            "false" | "0" | "FALSE" | "False" => Ok(false),
            other => Err(AppError::configuration(format!(
                "invalid {key}: {other} (expected true or false)"
            ))),
        },
        Err(_) => Ok(default),
    }
}
