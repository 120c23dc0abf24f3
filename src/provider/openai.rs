//! OpenAI function-tool schema and tool-call mapping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::mcp::types::{McpTool, McpToolResponse, ToolInvocation};

use super::format::tool_response_text;
use super::schema::{filter_properties, find_tool, parse_tool_arguments, ParsedArguments};

/// `{"type": "function", "function": {...}}` tool advertisement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiTool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: OpenAiFunctionDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiFunctionDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: OpenAiFunctionParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiFunctionParameters {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: Map<String, Value>,
}

/// A tool call emitted by an OpenAI-compatible model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: OpenAiFunctionCall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiFunctionCall {
    pub name: String,
    /// Raw JSON text as streamed by the model.
    #[serde(default)]
    pub arguments: String,
}

fn function_type() -> String {
    "function".to_string()
}

/// Advertise MCP tools as OpenAI function tools, named by tool id.
pub fn mcp_tools_to_openai_tools(tools: &[McpTool]) -> Vec<OpenAiTool> {
    tools
        .iter()
        .map(|tool| OpenAiTool {
            tool_type: function_type(),
            function: OpenAiFunctionDefinition {
                name: tool.id.clone(),
                description: tool.description.clone(),
                parameters: OpenAiFunctionParameters {
                    schema_type: "object".to_string(),
                    properties: filter_properties(tool.properties()),
                },
            },
        })
        .collect()
}

/// Resolve an OpenAI tool call to the MCP tool it names.
///
/// Malformed argument JSON is logged and replaced by `{}` so the call can
/// still be attempted.
pub fn openai_tool_call_to_mcp_tool(
    tools: Option<&[McpTool]>,
    call: &OpenAiToolCall,
) -> Option<ToolInvocation> {
    let tool = find_tool(tools, &call.function.name)?;
    let parsed = parse_tool_arguments(&call.function.arguments);
    if let ParsedArguments::Malformed(raw) = &parsed {
        warn!(
            call_id = %call.id,
            tool = %tool.id,
            arguments = %raw,
            "tool call arguments are not valid JSON; calling with no arguments"
        );
    }
    Some(ToolInvocation::new(
        call.id.clone(),
        tool.clone(),
        parsed.into_value_or_empty(),
    ))
}

/// `role: "tool"` message answering the call with the response's id.
pub fn tool_response_to_openai_message(response: &McpToolResponse) -> Value {
    serde_json::json!({
        "role": "tool",
        "tool_call_id": response.id,
        "content": tool_response_text(response),
    })
}
