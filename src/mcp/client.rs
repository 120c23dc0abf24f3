//! rmcp-backed tool transport keyed by server name.

use std::collections::HashMap;

use async_trait::async_trait;
use rmcp::{
    model::{CallToolRequestParams, CallToolResult, Content, JsonObject, ResourceContents},
    service::{DynService, RoleClient, RunningService, ServiceError},
};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::ToolcastError;

use super::transport::{CallToolRequest, McpToolTransport};

type DynClientService = Box<dyn DynService<RoleClient>>;
pub type McpRunningService = RunningService<RoleClient, DynClientService>;

/// Routes tool calls to already-initialized rmcp client sessions.
#[derive(Default)]
pub struct RmcpTransport {
    sessions: HashMap<String, Mutex<McpRunningService>>,
}

impl RmcpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or replace) the session serving `server_name`.
    pub fn attach(&mut self, server_name: impl Into<String>, session: McpRunningService) {
        self.sessions.insert(server_name.into(), Mutex::new(session));
    }

    pub fn has_server(&self, server_name: &str) -> bool {
        self.sessions.contains_key(server_name)
    }
}

#[async_trait]
impl McpToolTransport for RmcpTransport {
    async fn call_tool(
        &self,
        request: CallToolRequest,
    ) -> Result<serde_json::Value, ToolcastError> {
        let session = self
            .sessions
            .get(&request.client)
            .ok_or_else(|| ToolcastError::ServerNotFound(request.client.clone()))?;
        let session = session.lock().await;
        if session.is_closed() {
            return Err(ToolcastError::Stream(format!(
                "MCP session for {} is closed",
                request.client
            )));
        }

        let arguments = coerce_tool_arguments(request.args)?;
        debug!(server = %request.client, tool = %request.name, "rmcp call_tool");
        let result = session
            .call_tool(CallToolRequestParams {
                meta: None,
                name: request.name.clone().into(),
                arguments,
                task: None,
            })
            .await
            .map_err(|e| map_service_error(&request.client, e))?;

        map_call_result(&request.name, result)
    }
}

fn coerce_tool_arguments(value: serde_json::Value) -> Result<Option<JsonObject>, ToolcastError> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        serde_json::Value::Object(map) => Ok(Some(map)),
        other => Err(ToolcastError::InvalidArgument(format!(
            "MCP tool arguments must be a JSON object; got {other}"
        ))),
    }
}

fn extract_text_content(content: &[Content]) -> Option<String> {
    let mut lines = Vec::new();
    for item in content {
        if let Some(text) = item.as_text() {
            lines.push(text.text.clone());
            continue;
        }
        if let Some(resource) = item.as_resource() {
            if let ResourceContents::TextResourceContents { text, .. } = &resource.resource {
                lines.push(text.clone());
            }
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn map_call_result(name: &str, result: CallToolResult) -> Result<serde_json::Value, ToolcastError> {
    if result.is_error.unwrap_or(false) {
        let message = result
            .structured_content
            .as_ref()
            .map(|v| v.to_string())
            .or_else(|| extract_text_content(&result.content))
            .unwrap_or_else(|| "MCP tool returned an error result".into());

        return Err(ToolcastError::ToolExecution {
            tool_name: name.to_string(),
            message,
        });
    }

    Ok(serde_json::to_value(result)?)
}

fn map_service_error(server: &str, error: ServiceError) -> ToolcastError {
    match error {
        ServiceError::McpError(error) => ToolcastError::Transport {
            server: server.to_string(),
            message: format!("MCP error {}: {}", error.code.0, error.message),
        },
        ServiceError::TransportSend(error) => ToolcastError::Transport {
            server: server.to_string(),
            message: format!("send failed: {error}"),
        },
        ServiceError::TransportClosed => {
            ToolcastError::Stream(format!("{server}: MCP transport closed"))
        }
        ServiceError::Cancelled { reason } => {
            let suffix = reason
                .as_deref()
                .map(|r| format!(" ({r})"))
                .unwrap_or_default();
            ToolcastError::Stream(format!("{server}: MCP request cancelled{suffix}"))
        }
        ServiceError::Timeout { timeout } => ToolcastError::Timeout(timeout.as_millis() as u64),
        other => ToolcastError::Transport {
            server: server.to_string(),
            message: format!("MCP service error: {other}"),
        },
    }
}
