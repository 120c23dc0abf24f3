//! MCP tool model, filtering, invocation and response tracking.

pub mod executor;
pub mod filter;
pub mod invoke;
pub mod response;
pub mod transport;
pub mod types;

#[cfg(feature = "mcp")]
pub mod client;

pub use executor::ToolExecutor;
pub use filter::{active_servers, filter_mcp_tools};
pub use invoke::call_mcp_tool;
pub use response::{upsert_mcp_tool_response, ToolResponseSink};
pub use transport::{CallToolRequest, McpToolTransport};
pub use types::{
    McpServer, McpTool, McpToolResponse, ToolInvocation, ToolResponseStatus, ToolResponseUpdate,
};

#[cfg(feature = "mcp")]
pub use client::RmcpTransport;
