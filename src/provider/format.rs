//! Provider formatting helpers.

use serde_json::Value;

use crate::mcp::types::McpToolResponse;

/// Convert a tool result JSON value into a string payload for providers.
pub(crate) fn tool_result_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Text shown to the model for a finished tool call.
///
/// MCP results made only of text content collapse to their joined text;
/// anything else is serialized as JSON.
pub fn tool_response_text(response: &McpToolResponse) -> String {
    let Some(payload) = response.response.as_ref() else {
        return String::new();
    };
    match text_content(payload) {
        Some(text) => text,
        None => tool_result_to_string(payload),
    }
}

fn text_content(payload: &Value) -> Option<String> {
    let content = payload.get("content")?.as_array()?;
    let mut lines = Vec::with_capacity(content.len());
    for item in content {
        if item.get("type").and_then(Value::as_str) != Some("text") {
            return None;
        }
        lines.push(item.get("text")?.as_str()?.to_string());
    }
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
