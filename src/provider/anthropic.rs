//! Anthropic tool schema and `tool_use` mapping.
//!
//! Anthropic receives the tool's input schema unfiltered; unlike the
//! OpenAI and Gemini adapters no keywords are stripped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mcp::types::{McpTool, McpToolResponse, ToolInvocation};

use super::format::tool_response_text;
use super::schema::find_tool;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicTool {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub input_schema: Value,
}

/// A `tool_use` content block emitted by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicToolUse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub input: Value,
}

pub fn mcp_tools_to_anthropic_tools(tools: &[McpTool]) -> Vec<AnthropicTool> {
    tools
        .iter()
        .map(|tool| AnthropicTool {
            name: tool.id.clone(),
            description: tool.description.clone(),
            input_schema: tool.input_schema.clone(),
        })
        .collect()
}

/// Resolve a `tool_use` block; its pre-parsed input is passed through.
pub fn anthropic_tool_use_to_mcp_tool(
    tools: Option<&[McpTool]>,
    tool_use: &AnthropicToolUse,
) -> Option<ToolInvocation> {
    let tool = find_tool(tools, &tool_use.name)?;
    Some(ToolInvocation::new(
        tool_use.id.clone(),
        tool.clone(),
        tool_use.input.clone(),
    ))
}

/// `tool_result` content block for the next user message.
pub fn tool_response_to_anthropic_block(response: &McpToolResponse) -> Value {
    let mut block = serde_json::json!({
        "type": "tool_result",
        "tool_use_id": response.id,
        "content": tool_response_text(response),
    });
    if response.is_error() {
        block["is_error"] = Value::Bool(true);
    }
    block
}
