//! toolcast — MCP tool schemas for every provider
//!
//! Converts a provider-agnostic MCP tool list into the tool/function
//! schemas expected by OpenAI, Anthropic and Gemini, resolves the tool calls
//! those models emit back to MCP tools, invokes them through a pluggable
//! transport, and keeps a per-turn list of tool responses.
//!
//! # Quick Start
//!
//! ```
//! use toolcast::prelude::*;
//! use serde_json::json;
//!
//! let tools = vec![McpTool::new(
//!     "t1",
//!     "search-server",
//!     "search",
//!     json!({"properties": {"q": {"type": "string", "format": "uri"}}}),
//! )];
//!
//! let openai = mcp_tools_to_openai_tools(&tools);
//! assert_eq!(openai[0].function.name, "t1");
//! assert!(openai[0].function.parameters.properties["q"].get("format").is_none());
//! ```

pub mod config;
pub mod error;
pub mod mcp;
pub mod prelude;
pub mod provider;

#[cfg(feature = "cli")]
pub mod cli;
