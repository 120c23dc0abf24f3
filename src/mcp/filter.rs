//! Narrow tool lists to the servers that are currently enabled.

use super::types::{McpServer, McpTool};

/// Keep only tools owned by one of `enabled_servers`.
///
/// No tool list stays `None`. A tool list with no server list yields an
/// empty list: nothing is exposed unless a server is enabled.
pub fn filter_mcp_tools(
    tools: Option<&[McpTool]>,
    enabled_servers: Option<&[McpServer]>,
) -> Option<Vec<McpTool>> {
    let tools = tools?;
    let Some(servers) = enabled_servers else {
        return Some(Vec::new());
    };

    Some(
        tools
            .iter()
            .filter(|tool| servers.iter().any(|server| server.name == tool.server_name))
            .cloned()
            .collect(),
    )
}

/// Servers whose `is_active` flag is set, in registration order.
pub fn active_servers(servers: &[McpServer]) -> Vec<McpServer> {
    servers.iter().filter(|s| s.is_active).cloned().collect()
}
