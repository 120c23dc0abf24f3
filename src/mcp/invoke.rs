//! Dispatch a resolved invocation to the transport.

use tracing::debug;

use crate::error::Result;

use super::transport::{CallToolRequest, McpToolTransport};
use super::types::ToolInvocation;

/// Issue exactly one call for `invocation` and await its response.
///
/// Failures are returned to the caller untouched.
pub async fn call_mcp_tool(
    transport: &dyn McpToolTransport,
    invocation: &ToolInvocation,
) -> Result<serde_json::Value> {
    let request = CallToolRequest {
        client: invocation.tool.server_name.clone(),
        name: invocation.tool.name.clone(),
        args: invocation.arguments.clone(),
    };
    debug!(
        server = %request.client,
        tool = %request.name,
        call_id = %invocation.call_id,
        "calling MCP tool"
    );
    transport.call_tool(request).await
}
