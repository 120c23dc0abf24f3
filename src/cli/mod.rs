//! CLI entry point for toolcast.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::provider::ProviderFamily;

/// toolcast CLI
#[derive(Parser, Debug)]
#[command(name = "toolcast", version, about = "Project MCP tools into provider tool schemas")]
pub struct Cli {
    /// Enable debug logging (overridden by TOOLCAST_LOG)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the provider tool list for a JSON file of MCP tools
    Project(ProjectArgs),
    /// List registered MCP servers
    Servers(ServersArgs),
}

/// Arguments for `toolcast project`.
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Provider family (openai, anthropic, gemini)
    #[arg(short, long)]
    pub provider: ProviderFamily,

    /// JSON file holding an array of MCP tools
    #[arg(short, long)]
    pub tools: PathBuf,

    /// Config file (defaults to TOOLCAST_CONFIG, then the platform config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip filtering by enabled servers
    #[arg(long)]
    pub all_servers: bool,
}

/// Arguments for `toolcast servers`.
#[derive(Parser, Debug)]
pub struct ServersArgs {
    /// Config file (defaults to TOOLCAST_CONFIG, then the platform config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
