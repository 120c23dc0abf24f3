//! Error types for toolcast.

use thiserror::Error;

/// Primary error type for all toolcast operations.
#[derive(Error, Debug)]
pub enum ToolcastError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("Config encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("MCP server not found: {0}")]
    ServerNotFound(String),

    #[error("Tool execution error: {tool_name} — {message}")]
    ToolExecution { tool_name: String, message: String },

    #[error("Transport error ({server}): {message}")]
    Transport { server: String, message: String },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Stream error: {0}")]
    Stream(String),
}

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Serialization,
    InvalidInput,
    ToolExecution,
    Transport,
    Timeout,
    Unknown,
}

impl ToolcastError {
    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) | Self::ServerNotFound(_) => ErrorCategory::Configuration,
            Self::Serialization(_) | Self::TomlDecode(_) | Self::TomlEncode(_) => {
                ErrorCategory::Serialization
            }
            Self::InvalidArgument(_) => ErrorCategory::InvalidInput,
            Self::ToolExecution { .. } => ErrorCategory::ToolExecution,
            Self::Transport { .. } | Self::Stream(_) => ErrorCategory::Transport,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether a caller could reasonably retry.
    ///
    /// The adapter itself never retries; this is advisory for orchestrators.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Transport | ErrorCategory::Timeout
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ToolcastError>;
