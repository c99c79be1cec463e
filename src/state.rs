//! Shared application state.
//!
//! One pooled outbound HTTP client is built at startup and handed to both
//! upstream service clients. Tool invocations are stateless beyond this.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::AppConfig;
use crate::railways::RailwayClient;
use crate::weather::WeatherClient;

const USER_AGENT: &str = "sahayak-server/1.0";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct AppState {
    pub weather: WeatherClient,
    pub railways: RailwayClient,
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(AppConfig::from_env())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .pool_idle_timeout(Duration::from_secs(900))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create reqwest client");

        AppState {
            weather: WeatherClient::new(http_client.clone(), config.openweather_api_key),
            railways: RailwayClient::new(http_client, config.rapidapi_key),
            data_dir: config.data_dir,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
