//! Handlers behind the CLI subcommands.

use std::path::Path;

use crate::config::ToolcastConfig;
use crate::error::Result;
use crate::mcp::filter::filter_mcp_tools;
use crate::mcp::types::{McpServer, McpTool};
use crate::provider::project_tools;

use super::{ProjectArgs, ServersArgs};

fn load_config(path: Option<&Path>) -> Result<ToolcastConfig> {
    match path {
        Some(path) => ToolcastConfig::load(path),
        None => ToolcastConfig::from_env(),
    }
}

/// Render the projection as pretty JSON.
pub fn handle_project(args: &ProjectArgs) -> Result<String> {
    let raw = std::fs::read_to_string(&args.tools)?;
    let tools: Vec<McpTool> = serde_json::from_str(&raw)?;

    let tools = if args.all_servers {
        tools
    } else {
        let config = load_config(args.config.as_deref())?;
        let enabled = config.enabled_servers();
        filter_mcp_tools(Some(&tools), Some(&enabled)).unwrap_or_default()
    };

    let projected = project_tools(args.provider, Some(&tools))?;
    Ok(serde_json::to_string_pretty(&projected)?)
}

/// One line per server: name, state, and how it is reached.
pub fn handle_servers(args: &ServersArgs) -> Result<String> {
    let config = load_config(args.config.as_deref())?;
    let lines: Vec<String> = config
        .servers
        .iter()
        .map(|server| {
            let state = if server.is_active { "active" } else { "inactive" };
            let target = server
                .base_url
                .clone()
                .or_else(|| launch_command(server))
                .unwrap_or_default();
            format!("{}\t{}\t{}", server.name, state, target)
        })
        .collect();
    Ok(lines.join("\n"))
}

fn launch_command(server: &McpServer) -> Option<String> {
    let command = server.command.as_ref()?;
    let mut parts = vec![command.as_str()];
    parts.extend(server.args.iter().map(String::as_str));
    Some(parts.join(" "))
}
