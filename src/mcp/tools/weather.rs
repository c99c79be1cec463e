//! MCP tools for weather lookups.

use serde::Deserialize;
use serde_json::json;

use super::registry::ToolDescriptor;

pub const GET_WEATHER_BY_CITY_TOOL: &str = "get_weather_by_city";
pub const GET_FORECAST_BY_CITY_TOOL: &str = "get_forecast_by_city";
pub const GET_WEATHER_BY_COORDS_TOOL: &str = "get_weather_by_coords";
pub const GET_FORECAST_BY_COORDS_TOOL: &str = "get_forecast_by_coords";

pub fn get_weather_by_city_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GET_WEATHER_BY_CITY_TOOL.to_string(),
        description: concat!(
            "Get the current weather for a city: temperature, condition, humidity, ",
            "wind speed, pressure, and the chance of rain. Optionally pass a ",
            "two-letter country code (e.g. 'IN') to disambiguate the city name."
        )
        .to_string(),
        input_schema: city_schema(),
    }
}

pub fn get_forecast_by_city_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GET_FORECAST_BY_CITY_TOOL.to_string(),
        description: concat!(
            "Get the 5-day weather forecast for a city in 3-hour periods: ",
            "temperature, condition, humidity, and chance of rain per period. ",
            "Optionally pass a two-letter country code to disambiguate."
        )
        .to_string(),
        input_schema: city_schema(),
    }
}

pub fn get_weather_by_coords_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GET_WEATHER_BY_COORDS_TOOL.to_string(),
        description: "Get the current weather for a latitude/longitude pair.".to_string(),
        input_schema: coords_schema(),
    }
}

pub fn get_forecast_by_coords_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GET_FORECAST_BY_COORDS_TOOL.to_string(),
        description: "Get the 5-day weather forecast for a latitude/longitude pair.".to_string(),
        input_schema: coords_schema(),
    }
}

fn city_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "city": {
                "type": "string",
                "description": "Name of the city"
            },
            "country_code": {
                "type": "string",
                "description": "Two-letter country code (optional)"
            }
        },
        "required": ["city"]
    })
}

fn coords_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "latitude": {
                "type": "number",
                "description": "Latitude of the location"
            },
            "longitude": {
                "type": "number",
                "description": "Longitude of the location"
            }
        },
        "required": ["latitude", "longitude"]
    })
}

#[derive(Debug, Deserialize)]
pub struct CityRequest {
    pub city: String,
    #[serde(default)]
    pub country_code: String,
}

#[derive(Debug, Deserialize)]
pub struct CoordsRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors() {
        for descriptor in [
            get_weather_by_city_descriptor(),
            get_forecast_by_city_descriptor(),
            get_weather_by_coords_descriptor(),
            get_forecast_by_coords_descriptor(),
        ] {
            assert!(!descriptor.description.is_empty());
            assert!(descriptor.input_schema.get("properties").is_some());
        }
    }

    #[test]
    fn test_city_request_country_code_defaults_empty() {
        let request: CityRequest =
            serde_json::from_value(json!({ "city": "Bengaluru" })).unwrap();
        assert_eq!(request.city, "Bengaluru");
        assert!(request.country_code.is_empty());
    }
}
