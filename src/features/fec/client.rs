use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tokio::time::sleep;

use crate::config::AppConfig;
use crate::core::cache::DownloadCache;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::fec::dto::{CongressRow, PresidentRow};
use crate::features::fec::helpers::{parse_congress_csv, parse_president_csv};

const RETRY_ATTEMPTS: usize = 3;
const RETRY_DELAY_MS: u64 = 500;

pub struct FecClient {
    config: Arc<AppConfig>,
    cache: DownloadCache,
    http_client: reqwest::Client,
}

impl FecClient {
    pub fn new(config: Arc<AppConfig>, cache: DownloadCache) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            cache,
            http_client,
        })
    }

    pub async fn congress_results(&self, year: u16) -> Result<Vec<CongressRow>, AppError> {
        let body = self.fetch_dataset(year, "congress").await?;
        parse_congress_csv(&body)
    }

    pub async fn president_results(&self, year: u16) -> Result<Vec<PresidentRow>, AppError> {
        let body = self.fetch_dataset(year, "president").await?;
        parse_president_csv(&body)
    }

    async fn fetch_dataset(&self, year: u16, dataset: &str) -> Result<String, AppError> {
        let cache_key = format!("{dataset}-{year}");
        if let Some(cached) = self.cache.get(&cache_key).await? {
            tracing::debug!(year, dataset, "serving dataset from cache");
            return Ok(cached);
        }

        let url = Url::parse(&format!("{}/{year}/{dataset}.csv", self.config.base_url))
            .map_err(|err| AppError::internal(format!("invalid dataset url: {err}")))?;

        let mut last_error: Option<AppError> = None;

        for attempt in 0..RETRY_ATTEMPTS {
            match self.http_client.get(url.clone()).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let body = resp.text().await.map_err(|err| {
                        AppError::upstream(format!("failed to read {dataset} dataset: {err}"))
                    })?;
                    self.cache.put(&cache_key, &body).await?;
                    return Ok(body);
                }
                Ok(resp) => {
                    let status = resp.status();
                    let text = resp
                        .text()
                        .await
                        .unwrap_or_else(|_| "<failed to read body>".to_string());
                    let snippet = text.chars().take(512).collect::<String>();
                    last_error = Some(AppError::upstream(format!(
                        "request to {url} failed with {status}: {snippet}"
                    )));
                }
                Err(err) => {
                    last_error = Some(AppError::upstream(format!(
                        "network error contacting {url}: {err}"
                    )));
                }
            }

            if attempt < RETRY_ATTEMPTS - 1 {
                tracing::debug!(year, dataset, attempt, "retrying dataset fetch");
                sleep(Duration::from_millis(RETRY_DELAY_MS * (attempt as u64 + 1))).await;
            }
        }

        Err(last_error.unwrap_or_else(|| AppError::internal("request failed".to_string())))
    }
}
