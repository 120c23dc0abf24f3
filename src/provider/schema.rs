//! Property filtering and argument parsing shared by the provider adapters.

use serde_json::{Map, Value};
use tracing::debug;

use crate::mcp::types::McpTool;

/// JSON Schema keywords providers with a restricted schema dialect accept.
pub const SUPPORTED_SCHEMA_KEYS: [&str; 8] = [
    "type",
    "nullable",
    "required",
    "description",
    "properties",
    "items",
    "enum",
    "anyOf",
];

/// Restrict every property schema to [`SUPPORTED_SCHEMA_KEYS`].
///
/// Only the top level of each property is filtered; fragments nested under
/// `items`, `properties` or `anyOf` pass through as-is.
pub fn filter_properties(properties: Option<&Map<String, Value>>) -> Map<String, Value> {
    let Some(properties) = properties else {
        return Map::new();
    };
    properties
        .iter()
        .map(|(name, schema)| (name.clone(), filter_property(schema)))
        .collect()
}

fn filter_property(schema: &Value) -> Value {
    match schema {
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .filter(|(key, _)| SUPPORTED_SCHEMA_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Result of parsing a raw argument string from a provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedArguments {
    Parsed(Value),
    Malformed(String),
}

impl ParsedArguments {
    /// The parsed value, or an empty object when the payload was malformed.
    pub fn into_value_or_empty(self) -> Value {
        match self {
            Self::Parsed(value) => value,
            Self::Malformed(_) => Value::Object(Map::new()),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// Parse a JSON argument string. A blank string counts as `{}`.
pub fn parse_tool_arguments(raw: &str) -> ParsedArguments {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedArguments::Parsed(Value::Object(Map::new()));
    }
    match serde_json::from_str(trimmed) {
        Ok(value) => ParsedArguments::Parsed(value),
        Err(_) => ParsedArguments::Malformed(raw.to_string()),
    }
}

/// Find the tool whose `id` equals the provider-facing `name`.
pub(crate) fn find_tool<'a>(tools: Option<&'a [McpTool]>, name: &str) -> Option<&'a McpTool> {
    let tools = tools?;
    let found = tools.iter().find(|tool| tool.id == name);
    if found.is_none() {
        debug!(name, "no MCP tool matches provider call");
    }
    found
}
