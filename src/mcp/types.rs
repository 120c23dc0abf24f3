//! Canonical MCP tool, server and response types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

/// A tool advertised by an MCP server, in provider-agnostic form.
///
/// `id` is the join key shared with every provider: projections publish it
/// as the function name and resolution looks calls up by it. `server_name`
/// never leaves this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpTool {
    pub id: String,
    pub server_name: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema describing accepted arguments.
    #[serde(default = "empty_object_schema")]
    pub input_schema: Value,
}

impl McpTool {
    pub fn new(
        id: impl Into<String>,
        server_name: impl Into<String>,
        name: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            id: id.into(),
            server_name: server_name.into(),
            name: name.into(),
            description: None,
            input_schema,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The `properties` map of the input schema, if it has one.
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.input_schema.get("properties").and_then(Value::as_object)
    }
}

fn empty_object_schema() -> Value {
    serde_json::json!({ "type": "object", "properties": {} })
}

/// A provider tool call resolved against the canonical tool list.
///
/// Keeps the definition and the call arguments apart; they share only the
/// tool `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    /// Provider-issued call id (minted locally for Gemini).
    pub call_id: String,
    pub tool: McpTool,
    pub arguments: Value,
}

impl ToolInvocation {
    pub fn new(call_id: impl Into<String>, tool: McpTool, arguments: Value) -> Self {
        Self {
            call_id: call_id.into(),
            tool,
            arguments,
        }
    }
}

/// A registered MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpServer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default = "default_active", alias = "is_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

fn default_active() -> bool {
    true
}

impl McpServer {
    /// An active server with no transport details.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            base_url: None,
            command: None,
            args: Vec::new(),
            is_active: true,
            env: BTreeMap::new(),
        }
    }

    /// Register a stdio server launched from `command`.
    pub fn stdio(name: impl Into<String>, command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: Some(command.into()),
            args,
            ..Self::named(name)
        }
    }

    /// Register a remote server reached over HTTP.
    pub fn remote(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::named(name)
        }
    }
}

/// Lifecycle of one tool invocation within a turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ToolResponseStatus {
    Pending,
    Invoking,
    Done,
    Error,
}

/// Outcome of one tool invocation; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpToolResponse {
    pub id: String,
    pub tool: McpTool,
    pub status: ToolResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl McpToolResponse {
    pub fn new(id: impl Into<String>, tool: McpTool, status: ToolResponseStatus) -> Self {
        Self {
            id: id.into(),
            tool,
            status,
            response: None,
        }
    }

    pub fn with_response(mut self, response: Value) -> Self {
        self.response = Some(response);
        self
    }

    pub fn is_error(&self) -> bool {
        self.status == ToolResponseStatus::Error
    }
}

/// Payload delivered to the streaming sink after each response merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponseUpdate {
    pub text: String,
    pub tool_responses: Vec<McpToolResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_deserializes_from_camel_case() {
        let tool: McpTool = serde_json::from_value(json!({
            "id": "t1",
            "serverName": "s1",
            "name": "search",
            "description": "d",
            "inputSchema": { "properties": { "q": { "type": "string" } } }
        }))
        .unwrap();

        assert_eq!(tool.server_name, "s1");
        assert_eq!(tool.properties().unwrap().len(), 1);
    }

    #[test]
    fn missing_input_schema_defaults_to_empty_object() {
        let tool: McpTool =
            serde_json::from_value(json!({"id": "t", "serverName": "s", "name": "n"})).unwrap();
        assert_eq!(tool.input_schema["type"], "object");
        assert!(tool.properties().unwrap().is_empty());
    }

    #[test]
    fn server_accepts_snake_case_aliases() {
        let server: McpServer = serde_json::from_value(json!({
            "name": "fetch",
            "base_url": "http://localhost:3000/mcp",
            "is_active": false
        }))
        .unwrap();
        assert_eq!(server.base_url.as_deref(), Some("http://localhost:3000/mcp"));
        assert!(!server.is_active);
    }

    #[test]
    fn status_round_trips_as_lowercase() {
        assert_eq!(ToolResponseStatus::Invoking.to_string(), "invoking");
        assert_eq!(
            "done".parse::<ToolResponseStatus>().unwrap(),
            ToolResponseStatus::Done
        );
        assert_eq!(json!(ToolResponseStatus::Error), json!("error"));
    }

    #[test]
    fn update_serializes_tool_responses_in_camel_case() {
        let update = ToolResponseUpdate {
            text: "\n".into(),
            tool_responses: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({"text": "\n", "toolResponses": []})
        );
    }
}
