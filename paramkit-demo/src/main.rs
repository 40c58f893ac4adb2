//! Users API demo server

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use paramkit_config::{ConfigLoader, ParamkitConfig};
use paramkit_demo::create_app;
use paramkit_logging::init_logging_from_config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server bind address
    #[arg(long)]
    host: Option<String>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::new()
        .load(cli.config.as_ref())
        .context("Failed to load configuration")?;
    apply_cli_overrides(&mut config, &cli);
    config.validate_all()?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    init_logging_from_config(&config.logging)?;

    let app = create_app(&config)?;
    let address = config.server.socket_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "Users API listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn apply_cli_overrides(config: &mut ParamkitConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.bind_address = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
}
