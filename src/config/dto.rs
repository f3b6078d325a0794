use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub output_dir: String,
    pub cache_dir: String,
    pub cache_enabled: bool,
    pub cache_ttl_secs: u64,
    pub disable_proxy: bool,
}
