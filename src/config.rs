use serde::{Deserialize, Serialize};
use std::env;

/// Value the credential guard treats as "not a real key". Shipping builds
/// must override it through the environment.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_GOOGLE_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    pub api_key: String,
    pub engine_id: String,
    pub endpoint: String,
    pub max_results: u32,
    pub timeout_secs: u64,
}

impl SearchSettings {
    /// True when both credentials are set and the key is not the placeholder.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
            && !self.engine_id.trim().is_empty()
            && !self.api_key.contains(API_KEY_PLACEHOLDER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                workers: num_cpus::get(),
            },
            search: SearchSettings {
                api_key: API_KEY_PLACEHOLDER.to_string(),
                engine_id: String::new(),
                endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
                max_results: 3,
                timeout_secs: 8,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Config::default();

        // Server configuration
        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(workers) = env::var("WORKERS") {
            config.server.workers = workers.parse()?;
        }

        // Search configuration
        if let Ok(api_key) = env::var("GOOGLE_API_KEY") {
            config.search.api_key = api_key;
        }
        if let Ok(engine_id) = env::var("GOOGLE_CX") {
            config.search.engine_id = engine_id;
        }
        if let Ok(endpoint) = env::var("SEARCH_ENDPOINT") {
            config.search.endpoint = endpoint;
        }
        if let Ok(max_results) = env::var("SEARCH_MAX_RESULTS") {
            config.search.max_results = max_results.parse()?;
        }
        if let Ok(timeout_secs) = env::var("SEARCH_TIMEOUT_SECS") {
            config.search.timeout_secs = timeout_secs.parse()?;
        }

        Ok(config)
    }
}
