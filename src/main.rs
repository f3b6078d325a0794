use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use fec_results_generator::config::load_config;
use fec_results_generator::core::cache::DownloadCache;
use fec_results_generator::core::error::AppError;
use fec_results_generator::driver::{ELECTION_YEARS, run_years};
use fec_results_generator::features::fec::FecClient;
use fec_results_generator::features::results::{JsonGenerator, ResultsSource};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = Arc::new(load_config()?);
    let cache = DownloadCache::new(
        config.cache_enabled,
        &config.cache_dir,
        config.cache_ttl_secs,
    );
    let source: Arc<dyn ResultsSource> = Arc::new(FecClient::new(config.clone(), cache)?);

    run_years(&ELECTION_YEARS, |year| {
        JsonGenerator::new(&config, source.clone(), year)
    })
    .await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_target(false)
        .init();
}
