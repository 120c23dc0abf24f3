//! Convenience re-exports for common use.

pub use crate::config::ToolcastConfig;
pub use crate::error::{Result, ToolcastError};
pub use crate::mcp::{
    call_mcp_tool, filter_mcp_tools, upsert_mcp_tool_response, CallToolRequest, McpServer,
    McpTool, McpToolResponse, McpToolTransport, ToolExecutor, ToolInvocation, ToolResponseSink,
    ToolResponseStatus, ToolResponseUpdate,
};
pub use crate::provider::anthropic::{anthropic_tool_use_to_mcp_tool, mcp_tools_to_anthropic_tools};
pub use crate::provider::gemini::{gemini_function_call_to_mcp_tool, mcp_tools_to_gemini_tools};
pub use crate::provider::openai::{mcp_tools_to_openai_tools, openai_tool_call_to_mcp_tool};
pub use crate::provider::{project_tools, ProviderFamily};
