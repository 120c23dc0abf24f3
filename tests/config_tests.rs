//! Tests for configuration loading.

use std::sync::{Mutex, OnceLock};

use toolcast::config::{ToolcastConfig, CONFIG_PATH_ENV, DISABLED_SERVERS_ENV};
use toolcast::mcp::{filter_mcp_tools, McpServer, McpTool};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 2] = [CONFIG_PATH_ENV, DISABLED_SERVERS_ENV];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let mut config = ToolcastConfig::new();
    config
        .add_server(McpServer::stdio("fetch", "uvx", vec!["mcp-server-fetch".into()]))
        .unwrap();
    config
        .add_server(McpServer::remote("docs", "http://localhost:3000/mcp"))
        .unwrap();
    let path = dir.path().join("toolcast.toml");
    config.save(&path).unwrap();
    path
}

#[test]
fn from_env_reads_config_path_override() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }

    let dir = tempfile::TempDir::new().unwrap();
    let path = write_config(&dir);
    std::env::set_var(CONFIG_PATH_ENV, &path);

    let config = ToolcastConfig::from_env().unwrap();
    assert_eq!(config.servers.len(), 2);
    assert_eq!(config.enabled_servers().len(), 2);
}

#[test]
fn from_env_applies_disabled_servers() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }

    let dir = tempfile::TempDir::new().unwrap();
    let path = write_config(&dir);
    std::env::set_var(CONFIG_PATH_ENV, &path);
    std::env::set_var(DISABLED_SERVERS_ENV, "docs");

    let config = ToolcastConfig::from_env().unwrap();
    let enabled = config.enabled_servers();

    let tools = vec![
        McpTool::new("t1", "fetch", "get", serde_json::json!({})),
        McpTool::new("t2", "docs", "search", serde_json::json!({})),
    ];
    let visible = filter_mcp_tools(Some(&tools), Some(&enabled)).unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "t1");
}

#[test]
fn from_env_with_missing_file_is_empty() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }

    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var(CONFIG_PATH_ENV, dir.path().join("missing.toml"));

    let config = ToolcastConfig::from_env().unwrap();
    assert!(config.servers.is_empty());
}

#[test]
fn malformed_file_is_a_decode_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "servers = 3").unwrap();

    let err = ToolcastConfig::load(&path).expect_err("servers must be an array of tables");
    assert!(matches!(err, toolcast::error::ToolcastError::TomlDecode(_)));
}
