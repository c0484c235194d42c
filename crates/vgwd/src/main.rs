//! vgwd - Vehicle Gateway Daemon
//!
//! Serves the public vehicle-telemetry REST API and fulfills each request
//! by calling the vendor telemetry API.
//!
//! Usage:
//!   vgwd [config.toml]
//!
//! If no config file is provided, defaults are used (port 3000, vendor API
//! at http://gmapi.azurewebsites.net).

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vgw_api::{create_router, AppState};
use vgw_upstream::UpstreamClient;

use config::GatewayConfig;

/// Parsed command-line arguments
struct Args {
    /// Daemon config file (TOML)
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let mut result = Args { config_path: None };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(arg.to_string());
            }
            _ => {
                tracing::warn!("Unknown argument: {}", arg);
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"vgwd - Vehicle Gateway Daemon

Usage: vgwd [OPTIONS] [config.toml]

Options:
  -h, --help    Print this help message

Examples:
  # Run with defaults (port 3000, vendor API at gmapi.azurewebsites.net)
  vgwd

  # Run with a config file
  vgwd config.toml

Config file format:
  port = 3000

  [upstream]
  base_url = "http://gmapi.azurewebsites.net"
  timeout_secs = 30
  connect_timeout_secs = 10
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vgwd=info,vgw_api=info,vgw_upstream=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting vgwd (Vehicle Gateway Daemon)");

    let args = parse_args();

    let config = if let Some(ref path) = args.config_path {
        tracing::info!("Loading config from: {}", path);
        GatewayConfig::load(path).map_err(|e| anyhow::anyhow!(e))?
    } else {
        tracing::info!("No config file provided, using defaults");
        GatewayConfig::default()
    };

    let client = UpstreamClient::with_config(
        &config.upstream.base_url,
        config.upstream.timeout(),
        config.upstream.connect_timeout(),
    )?;
    tracing::info!("Vendor API at {}", client.base_url());

    let state = AppState::new(Arc::new(client));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
