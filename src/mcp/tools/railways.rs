//! MCP tools for Indian-railway lookups.

use serde::Deserialize;
use serde_json::json;

use super::registry::ToolDescriptor;

pub const GET_TRAIN_INFO_TOOL: &str = "get_train_info";
pub const SEARCH_STATIONS_TOOL: &str = "search_stations";

pub fn get_train_info_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GET_TRAIN_INFO_TOOL.to_string(),
        description: concat!(
            "Get basic information about an Indian Railways train: name, origin, ",
            "destination, train type, journey classes, and the full stop-by-stop ",
            "schedule. The train number must be 4 or 5 digits."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "train_number": {
                    "type": "string",
                    "description": "The train number to look up (4-5 digits)"
                }
            },
            "required": ["train_number"]
        }),
    }
}

pub fn search_stations_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: SEARCH_STATIONS_TOOL.to_string(),
        description: concat!(
            "Search Indian Railways stations by name. Returns matching station ",
            "names with their codes, and the state where known."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Full or partial station name"
                }
            },
            "required": ["query"]
        }),
    }
}

#[derive(Debug, Deserialize)]
pub struct TrainInfoRequest {
    pub train_number: String,
}

#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors() {
        let train = get_train_info_descriptor();
        assert_eq!(train.name, GET_TRAIN_INFO_TOOL);
        assert!(train.input_schema.get("properties").is_some());

        let stations = search_stations_descriptor();
        assert_eq!(stations.name, SEARCH_STATIONS_TOOL);
        assert!(!stations.description.is_empty());
    }
}
