//! Value-to-text helpers shared by the tool formatters.
//!
//! Upstream payloads are untrusted JSON. A missing leaf never aborts a
//! render; it degrades to a placeholder string and rendering continues.

use serde_json::Value;

/// Render a single JSON leaf, falling back to `placeholder` when the
/// value is absent or null.
pub fn leaf(value: Option<&Value>, placeholder: &str) -> String {
    match value {
        None | Some(Value::Null) => placeholder.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Look up `key` on a JSON object and render it, `"N/A"` when missing.
pub fn field(object: &Value, key: &str) -> String {
    leaf(object.get(key), "N/A")
}

/// Same as [`field`] with a caller-chosen placeholder.
pub fn field_or(object: &Value, key: &str, placeholder: &str) -> String {
    leaf(object.get(key), placeholder)
}

/// Join a JSON array of names with `", "`. Absent and empty lists both
/// render as `"N/A"`.
pub fn join_names(value: Option<&Value>) -> String {
    match value.and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|item| leaf(Some(item), "N/A"))
            .collect::<Vec<_>>()
            .join(", "),
        _ => "N/A".to_string(),
    }
}
