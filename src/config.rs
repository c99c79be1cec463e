//! Environment-backed configuration.
//!
//! Loaded once at startup. Missing API keys are not fatal: the affected
//! upstream calls fail authentication and flow through the same degraded
//! response paths as any other failed call.

use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenWeatherMap API key (`OPENWEATHER_API_KEY`).
    pub openweather_api_key: String,
    /// RapidAPI key for the IRCTC train-search API (`RAPIDAPI_KEY`).
    pub rapidapi_key: String,
    /// Directory the file-summary tools read from (`DATA_DIR`).
    pub data_dir: PathBuf,
    /// HTTP bind port (`PORT`).
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let openweather_api_key = env::var("OPENWEATHER_API_KEY").unwrap_or_default();
        if openweather_api_key.is_empty() {
            log::warn!("OPENWEATHER_API_KEY is not set; weather lookups will fail authentication");
        }

        let rapidapi_key = env::var("RAPIDAPI_KEY").unwrap_or_default();
        if rapidapi_key.is_empty() {
            log::warn!("RAPIDAPI_KEY is not set; railway lookups will fail authentication");
        }

        let data_dir = env::var("DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string())
            .into();

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            openweather_api_key,
            rapidapi_key,
            data_dir,
            port,
        }
    }
}
