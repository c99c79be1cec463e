//! Tool registry - central routing for MCP tools.
//!
//! Provides `list_tools()` and `call_tool()` per the MCP spec. Every
//! failure below this point is collapsed into a `ToolResult` string; the
//! RPC layer never sees a tool-level error.

use actix_web::web;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::datafiles;
use crate::mcp::content::ToolResult;
use crate::state::AppState;
use crate::weather::Location;

use super::datafiles as datafile_tools;
use super::railways as railway_tools;
use super::weather as weather_tools;

/// Tool descriptor conforming to the MCP specification.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Central registry for all MCP tools.
#[derive(Debug, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    pub fn new() -> Self {
        Self
    }

    /// List all available tools per MCP spec.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![
            // Weather tools
            weather_tools::get_weather_by_city_descriptor(),
            weather_tools::get_forecast_by_city_descriptor(),
            weather_tools::get_weather_by_coords_descriptor(),
            weather_tools::get_forecast_by_coords_descriptor(),
            // Railway tools
            railway_tools::get_train_info_descriptor(),
            railway_tools::search_stations_descriptor(),
            // Data-file tools
            datafile_tools::summarize_csv_descriptor(),
            datafile_tools::summarize_parquet_descriptor(),
        ]
    }

    /// Call a tool by name with the given arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Value>,
        app_state: &web::Data<AppState>,
    ) -> ToolResult {
        match name {
            weather_tools::GET_WEATHER_BY_CITY_TOOL => {
                self.call_weather_by_city(arguments, app_state).await
            }
            weather_tools::GET_FORECAST_BY_CITY_TOOL => {
                self.call_forecast_by_city(arguments, app_state).await
            }
            weather_tools::GET_WEATHER_BY_COORDS_TOOL => {
                self.call_weather_by_coords(arguments, app_state).await
            }
            weather_tools::GET_FORECAST_BY_COORDS_TOOL => {
                self.call_forecast_by_coords(arguments, app_state).await
            }
            railway_tools::GET_TRAIN_INFO_TOOL => {
                self.call_train_info(arguments, app_state).await
            }
            railway_tools::SEARCH_STATIONS_TOOL => {
                self.call_search_stations(arguments, app_state).await
            }
            datafile_tools::SUMMARIZE_CSV_TOOL => self.call_summarize_csv(arguments, app_state),
            datafile_tools::SUMMARIZE_PARQUET_TOOL => {
                self.call_summarize_parquet(arguments, app_state)
            }
            _ => {
                let available = self
                    .list_tools()
                    .iter()
                    .map(|tool| tool.name.clone())
                    .collect::<Vec<_>>()
                    .join(", ");
                ToolResult::error(format!(
                    "Tool '{}' is not available. Available tools: {}",
                    name, available
                ))
            }
        }
    }

    // =========================================================================
    // Weather tools
    // =========================================================================

    async fn call_weather_by_city(
        &self,
        arguments: Option<Value>,
        app_state: &web::Data<AppState>,
    ) -> ToolResult {
        let request: weather_tools::CityRequest = match parse_arguments(arguments) {
            Ok(request) => request,
            Err(err) => return ToolResult::error(err),
        };

        let location = Location::city(&request.city, &request.country_code);
        ToolResult::text(
            app_state
                .weather
                .current_report_with_rain_chance(&location)
                .await,
        )
    }

    async fn call_forecast_by_city(
        &self,
        arguments: Option<Value>,
        app_state: &web::Data<AppState>,
    ) -> ToolResult {
        let request: weather_tools::CityRequest = match parse_arguments(arguments) {
            Ok(request) => request,
            Err(err) => return ToolResult::error(err),
        };

        let location = Location::city(&request.city, &request.country_code);
        ToolResult::text(app_state.weather.forecast_report(&location).await)
    }

    async fn call_weather_by_coords(
        &self,
        arguments: Option<Value>,
        app_state: &web::Data<AppState>,
    ) -> ToolResult {
        let request: weather_tools::CoordsRequest = match parse_arguments(arguments) {
            Ok(request) => request,
            Err(err) => return ToolResult::error(err),
        };

        let location = Location::coords(request.latitude, request.longitude);
        ToolResult::text(app_state.weather.current_report(&location).await)
    }

    async fn call_forecast_by_coords(
        &self,
        arguments: Option<Value>,
        app_state: &web::Data<AppState>,
    ) -> ToolResult {
        let request: weather_tools::CoordsRequest = match parse_arguments(arguments) {
            Ok(request) => request,
            Err(err) => return ToolResult::error(err),
        };

        let location = Location::coords(request.latitude, request.longitude);
        ToolResult::text(app_state.weather.forecast_report(&location).await)
    }

    // =========================================================================
    // Railway tools
    // =========================================================================

    async fn call_train_info(
        &self,
        arguments: Option<Value>,
        app_state: &web::Data<AppState>,
    ) -> ToolResult {
        let request: railway_tools::TrainInfoRequest = match parse_arguments(arguments) {
            Ok(request) => request,
            Err(err) => return ToolResult::error(err),
        };

        ToolResult::text(app_state.railways.train_info(&request.train_number).await)
    }

    async fn call_search_stations(
        &self,
        arguments: Option<Value>,
        app_state: &web::Data<AppState>,
    ) -> ToolResult {
        let request: railway_tools::StationSearchRequest = match parse_arguments(arguments) {
            Ok(request) => request,
            Err(err) => return ToolResult::error(err),
        };

        ToolResult::text(app_state.railways.station_search(&request.query).await)
    }

    // =========================================================================
    // Data-file tools
    // =========================================================================

    fn call_summarize_csv(
        &self,
        arguments: Option<Value>,
        app_state: &web::Data<AppState>,
    ) -> ToolResult {
        let request: datafile_tools::SummarizeFileRequest = match parse_arguments(arguments) {
            Ok(request) => request,
            Err(err) => return ToolResult::error(err),
        };

        match datafiles::csv_summary(&app_state.data_dir, &request.filename) {
            Ok(summary) => ToolResult::text(summary),
            Err(err) => ToolResult::error(format!("Failed to summarize CSV file: {}", err)),
        }
    }

    fn call_summarize_parquet(
        &self,
        arguments: Option<Value>,
        app_state: &web::Data<AppState>,
    ) -> ToolResult {
        let request: datafile_tools::SummarizeFileRequest = match parse_arguments(arguments) {
            Ok(request) => request,
            Err(err) => return ToolResult::error(err),
        };

        match datafiles::parquet_summary(&app_state.data_dir, &request.filename) {
            Ok(summary) => ToolResult::text(summary),
            Err(err) => ToolResult::error(format!("Failed to summarize Parquet file: {}", err)),
        }
    }
}

fn parse_arguments<T: for<'de> Deserialize<'de>>(arguments: Option<Value>) -> Result<T, String> {
    let value = arguments.unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|err| format!("Invalid arguments: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_tool_once() {
        let registry = ToolRegistry::new();
        let mut names: Vec<String> = registry
            .list_tools()
            .into_iter()
            .map(|tool| tool.name)
            .collect();
        assert_eq!(names.len(), 8);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_parse_arguments_reports_missing_fields() {
        let parsed: Result<railway_tools::TrainInfoRequest, String> =
            parse_arguments(Some(serde_json::json!({})));
        assert!(parsed.unwrap_err().starts_with("Invalid arguments:"));
    }
}
