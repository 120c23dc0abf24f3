//! Gemini function-declaration schema and function-call mapping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mcp::types::{McpTool, McpToolResponse, ToolInvocation};

use super::format::tool_response_text;
use super::schema::{filter_properties, find_tool};

/// Tool group holding every function declaration for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiTool {
    pub function_declarations: Vec<GeminiFunctionDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiFunctionDeclaration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: GeminiFunctionParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiFunctionParameters {
    /// Gemini's upper-case schema type, always `OBJECT` here.
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: Map<String, Value>,
}

/// A `functionCall` part emitted by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiFunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

/// Wrap all tools in one tool group; no tools means no group at all.
pub fn mcp_tools_to_gemini_tools(tools: Option<&[McpTool]>) -> Vec<GeminiTool> {
    let Some(tools) = tools.filter(|tools| !tools.is_empty()) else {
        return Vec::new();
    };

    let function_declarations = tools
        .iter()
        .map(|tool| GeminiFunctionDeclaration {
            name: tool.id.clone(),
            description: tool.description.clone(),
            parameters: GeminiFunctionParameters {
                schema_type: "OBJECT".to_string(),
                properties: filter_properties(tool.properties()),
            },
        })
        .collect();

    vec![GeminiTool {
        function_declarations,
    }]
}

/// Resolve a function call. Gemini may omit a call id, in which case one
/// is minted so the response list can still key on it.
pub fn gemini_function_call_to_mcp_tool(
    tools: Option<&[McpTool]>,
    call: &GeminiFunctionCall,
) -> Option<ToolInvocation> {
    let tool = find_tool(tools, &call.name)?;
    let call_id = call
        .id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let arguments = call
        .args
        .clone()
        .unwrap_or_else(|| Value::Object(Map::new()));
    Some(ToolInvocation::new(call_id, tool.clone(), arguments))
}

/// `functionResponse` part answering a call to the response's tool.
pub fn tool_response_to_gemini_part(response: &McpToolResponse) -> Value {
    serde_json::json!({
        "functionResponse": {
            "name": response.tool.id,
            "response": {
                "content": tool_response_text(response),
            },
        }
    })
}
