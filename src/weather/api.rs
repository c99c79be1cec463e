//! OpenWeatherMap client.

use serde_json::Value;

use super::format::{format_current, format_forecast};

const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Location selector for the OpenWeatherMap query string.
#[derive(Debug, Clone)]
pub enum Location {
    City { name: String, country_code: String },
    Coords { latitude: f64, longitude: f64 },
}

impl Location {
    pub fn city(name: &str, country_code: &str) -> Self {
        Location::City {
            name: name.to_string(),
            country_code: country_code.to_string(),
        }
    }

    pub fn coords(latitude: f64, longitude: f64) -> Self {
        Location::Coords {
            latitude,
            longitude,
        }
    }

    fn query_params(&self) -> Vec<(String, String)> {
        match self {
            Location::City { name, country_code } => {
                let query = if country_code.is_empty() {
                    name.clone()
                } else {
                    format!("{},{}", name, country_code)
                };
                vec![("q".to_string(), query)]
            }
            Location::Coords {
                latitude,
                longitude,
            } => vec![
                ("lat".to_string(), latitude.to_string()),
                ("lon".to_string(), longitude.to_string()),
            ],
        }
    }
}

#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self { http, api_key }
    }

    /// GET one OpenWeatherMap endpoint. Any transport, status, or decode
    /// failure is logged and collapses to `None`; the caller degrades to
    /// its "unable to fetch" response.
    async fn fetch(
        &self,
        endpoint: &str,
        location: &Location,
        extra: &[(String, String)],
    ) -> Option<Value> {
        let url = format!("{}/{}", OPENWEATHER_API_BASE, endpoint);
        let mut params = location.query_params();
        params.push(("appid".to_string(), self.api_key.clone()));
        params.push(("units".to_string(), "metric".to_string()));
        params.extend_from_slice(extra);

        let response = match self.http.get(&url).query(&params).send().await {
            Ok(response) => response,
            Err(err) => {
                log::error!("error making weather request: {}", err);
                return None;
            }
        };
        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(err) => {
                log::error!("error making weather request: {}", err);
                return None;
            }
        };
        match response.json::<Value>().await {
            Ok(body) => Some(body),
            Err(err) => {
                log::error!("error decoding weather response: {}", err);
                None
            }
        }
    }

    /// Current weather for a location, with the chance-of-rain line
    /// backfilled from the first forecast period (the current-weather
    /// endpoint does not carry a precipitation probability).
    pub async fn current_report_with_rain_chance(&self, location: &Location) -> String {
        let weather = match self.fetch("weather", location, &[]).await {
            Some(weather) => weather,
            None => return "Unable to fetch weather data for this location.".to_string(),
        };

        let cnt = [("cnt".to_string(), "1".to_string())];
        let pop = self
            .fetch("forecast", location, &cnt)
            .await
            .as_ref()
            .and_then(|forecast| forecast.get("list"))
            .and_then(Value::as_array)
            .and_then(|list| list.first())
            .map(|entry| entry.get("pop").and_then(Value::as_f64).unwrap_or(0.0));

        format_current(Some(&weather), pop)
    }

    /// Current weather without the forecast backfill; the chance-of-rain
    /// line is omitted entirely.
    pub async fn current_report(&self, location: &Location) -> String {
        match self.fetch("weather", location, &[]).await {
            Some(weather) => format_current(Some(&weather), None),
            None => "Unable to fetch weather data for this location.".to_string(),
        }
    }

    /// Five-day forecast report.
    pub async fn forecast_report(&self, location: &Location) -> String {
        match self.fetch("forecast", location, &[]).await {
            Some(forecast) => format_forecast(Some(&forecast)),
            None => "Unable to fetch forecast data for this location.".to_string(),
        }
    }
}
