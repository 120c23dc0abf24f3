//! toolcast CLI binary entry point.

use clap::Parser;
use toolcast::cli::commands::{handle_project, handle_servers};
use toolcast::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("TOOLCAST_LOG").unwrap_or_else(|_| {
        if cli.debug {
            EnvFilter::new("toolcast=debug")
        } else {
            EnvFilter::new("toolcast=warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Project(args) => handle_project(args),
        Commands::Servers(args) => handle_servers(args),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
