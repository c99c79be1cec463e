//! MCP tools for local data-file summaries.

use serde::Deserialize;
use serde_json::json;

use super::registry::ToolDescriptor;

pub const SUMMARIZE_CSV_TOOL: &str = "summarize_csv_file";
pub const SUMMARIZE_PARQUET_TOOL: &str = "summarize_parquet_file";

pub fn summarize_csv_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: SUMMARIZE_CSV_TOOL.to_string(),
        description: concat!(
            "Summarize a CSV file in the server's data directory by reporting ",
            "its number of rows and columns."
        )
        .to_string(),
        input_schema: file_schema("Name of the CSV file in the data directory (e.g. 'sample.csv')"),
    }
}

pub fn summarize_parquet_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: SUMMARIZE_PARQUET_TOOL.to_string(),
        description: concat!(
            "Summarize a Parquet file in the server's data directory by reporting ",
            "its number of rows and columns."
        )
        .to_string(),
        input_schema: file_schema(
            "Name of the Parquet file in the data directory (e.g. 'sample.parquet')",
        ),
    }
}

fn file_schema(description: &str) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "filename": {
                "type": "string",
                "description": description
            }
        },
        "required": ["filename"]
    })
}

#[derive(Debug, Deserialize)]
pub struct SummarizeFileRequest {
    pub filename: String,
}
