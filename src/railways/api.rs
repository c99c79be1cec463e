//! IRCTC train-search client (RapidAPI).
//!
//! Unlike the weather client, non-2xx responses are not collapsed before
//! formatting: the raw error body is embedded in the returned string so
//! the caller sees what the upstream said.

use serde_json::Value;

use super::format::{format_station_matches, format_train_details, validate_train_number};

const RAPID_API_HOST: &str = "indian-railway-irctc.p.rapidapi.com";
const TRAIN_SEARCH_BASE: &str = "https://indian-railway-irctc.p.rapidapi.com/api/trains-search/v1";

#[derive(Clone)]
pub struct RailwayClient {
    http: reqwest::Client,
    api_key: String,
}

impl RailwayClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self { http, api_key }
    }

    /// GET one train-search endpoint with the RapidAPI headers attached,
    /// returning the status and raw body.
    async fn fetch(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<(reqwest::StatusCode, String), reqwest::Error> {
        let response = self
            .http
            .get(url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", RAPID_API_HOST)
            .header("x-rapid-api", "rapid-api-database")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// Basic information and schedule for a train. The number is validated
    /// before any network call is made.
    pub async fn train_info(&self, train_number: &str) -> String {
        if !validate_train_number(train_number) {
            return "Invalid train number. Please provide a 4-5 digit number.".to_string();
        }

        log::info!("looking up train {}", train_number);
        let url = format!("{}/train/{}", TRAIN_SEARCH_BASE, train_number);

        match self.fetch(&url, &[("isH5", "true"), ("client", "web")]).await {
            Ok((status, body)) if status.is_success() => {
                match serde_json::from_str::<Value>(&body) {
                    Ok(data) => format_train_details(&data),
                    Err(err) => format!("Error occurred: {}", err),
                }
            }
            Ok((_, body)) => format!("Error response: {}", body),
            Err(err) => format!("Error occurred: {}", err),
        }
    }

    /// Stations whose names match the query.
    pub async fn station_search(&self, query: &str) -> String {
        log::info!("searching stations matching '{}'", query);
        let url = format!("{}/suggest-station", TRAIN_SEARCH_BASE);

        match self
            .fetch(&url, &[("q", query), ("isH5", "true"), ("client", "web")])
            .await
        {
            Ok((status, body)) if status.is_success() => {
                match serde_json::from_str::<Value>(&body) {
                    Ok(data) => format_station_matches(&data),
                    Err(err) => format!("Error occurred: {}", err),
                }
            }
            Ok((_, body)) => format!("Error response: {}", body),
            Err(err) => format!("Error occurred: {}", err),
        }
    }
}
