//! Seam to the subsystem that actually executes MCP tool calls.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ToolcastError;

/// One tool call addressed to a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolRequest {
    /// Owning server name.
    pub client: String,
    /// Upstream tool name, as the server knows it.
    pub name: String,
    pub args: serde_json::Value,
}

/// Executes tool calls against MCP servers.
///
/// Implementations own connection management, retries and timeouts.
#[async_trait]
pub trait McpToolTransport: Send + Sync {
    async fn call_tool(&self, request: CallToolRequest) -> Result<serde_json::Value, ToolcastError>;
}
