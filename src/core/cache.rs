use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tokio::task;

use crate::core::error::AppError;

#[derive(Serialize, Deserialize)]
struct CacheEnvelope {
    stored_at: u64,
    payload: String,
}

// Disk cache for raw downloaded datasets, one JSON envelope per key.
#[derive(Clone)]
pub struct DownloadCache {
    enabled: bool,
    dir: PathBuf,
    ttl_secs: u64,
}

impl DownloadCache {
    pub fn new(enabled: bool, dir: &str, ttl_secs: u64) -> Self {
        Self {
            enabled,
            dir: PathBuf::from(dir),
            ttl_secs,
        }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        if !self.enabled {
            return Ok(None);
        }

        let path = self.entry_path(key);
        let ttl = self.ttl_secs;

        task::spawn_blocking(move || -> Result<Option<String>, AppError> {
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
                Err(err) => {
                    return Err(AppError::internal(format!("cache lookup failed: {err}")));
                }
            };

            let envelope: CacheEnvelope = serde_json::from_slice(&bytes)
                .map_err(|err| AppError::internal(format!("failed to decode cache entry: {err}")))?;

            if current_timestamp().saturating_sub(envelope.stored_at) <= ttl {
                return Ok(Some(envelope.payload));
            }

            Ok(None)
        })
        .await
        .map_err(|err| AppError::internal(format!("cache task join error: {err}")))?
    }

    pub async fn put(&self, key: &str, body: &str) -> Result<(), AppError> {
        if !self.enabled {
            return Ok(());
        }

        let envelope = CacheEnvelope {
            stored_at: current_timestamp(),
            payload: body.to_string(),
        };
        let data = serde_json::to_vec(&envelope)
            .map_err(|err| AppError::internal(format!("failed to encode cache entry: {err}")))?;

        let dir = self.dir.clone();
        let path = self.entry_path(key);

        task::spawn_blocking(move || -> Result<(), AppError> {
            fs::create_dir_all(&dir)
                .map_err(|err| AppError::internal(format!("failed to create cache dir: {err}")))?;
            fs::write(&path, data)
                .map_err(|err| AppError::internal(format!("failed to write cache entry: {err}")))?;
            Ok(())
        })
        .await
        .map_err(|err| AppError::internal(format!("cache task join error: {err}")))??;

        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
                    ch
                } else {
                    '-'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}
