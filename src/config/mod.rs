//! Configuration: the registry of MCP servers (file > env overrides).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ToolcastError};
use crate::mcp::filter::active_servers;
use crate::mcp::types::McpServer;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "toolcast.toml";

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "TOOLCAST_CONFIG";

/// Comma-separated server names forced inactive regardless of the file.
pub const DISABLED_SERVERS_ENV: &str = "TOOLCAST_DISABLED_SERVERS";

/// Registered MCP servers and their enabled state.
///
/// ```toml
/// [[servers]]
/// name = "fetch"
/// command = "uvx"
/// args = ["mcp-server-fetch"]
///
/// [[servers]]
/// name = "docs"
/// baseUrl = "http://localhost:3000/mcp"
/// isActive = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolcastConfig {
    #[serde(default)]
    pub servers: Vec<McpServer>,
}

impl ToolcastConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.check_unique_names()?;
        Ok(config)
    }

    /// Load from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading toolcast config");
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Load from `path`, or start empty when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no toolcast config; starting empty");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// `<platform config dir>/toolcast.toml`, when a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "toolcast", "toolcast")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolve the config path from `TOOLCAST_CONFIG`, then the default path.
    pub fn resolve_path() -> Option<PathBuf> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_path)
    }

    /// Load the config found via [`Self::resolve_path`] and apply
    /// `TOOLCAST_DISABLED_SERVERS`.
    pub fn from_env() -> Result<Self> {
        let mut config = match Self::resolve_path() {
            Some(path) => Self::load_or_default(path)?,
            None => Self::default(),
        };
        if let Ok(disabled) = std::env::var(DISABLED_SERVERS_ENV) {
            config.disable_listed(&disabled);
        }
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn server(&self, name: &str) -> Option<&McpServer> {
        self.servers.iter().find(|s| s.name == name)
    }

    /// Register a server. Names must be unique.
    pub fn add_server(&mut self, server: McpServer) -> Result<()> {
        if self.server(&server.name).is_some() {
            return Err(ToolcastError::Configuration(format!(
                "MCP server already registered: {}",
                server.name
            )));
        }
        self.servers.push(server);
        Ok(())
    }

    pub fn remove_server(&mut self, name: &str) -> Result<McpServer> {
        let index = self
            .servers
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| ToolcastError::ServerNotFound(name.to_string()))?;
        Ok(self.servers.remove(index))
    }

    pub fn set_server_active(&mut self, name: &str, active: bool) -> Result<()> {
        let server = self
            .servers
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| ToolcastError::ServerNotFound(name.to_string()))?;
        server.is_active = active;
        Ok(())
    }

    /// Servers currently enabled, for use with [`crate::mcp::filter_mcp_tools`].
    pub fn enabled_servers(&self) -> Vec<McpServer> {
        active_servers(&self.servers)
    }

    fn disable_listed(&mut self, raw: &str) {
        for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if let Some(server) = self.servers.iter_mut().find(|s| s.name == name) {
                debug!(server = name, "disabled by environment");
                server.is_active = false;
            }
        }
    }

    fn check_unique_names(&self) -> Result<()> {
        for (i, server) in self.servers.iter().enumerate() {
            if self.servers[..i].iter().any(|s| s.name == server.name) {
                return Err(ToolcastError::Configuration(format!(
                    "duplicate MCP server name: {}",
                    server.name
                )));
            }
        }
        Ok(())
    }
}
