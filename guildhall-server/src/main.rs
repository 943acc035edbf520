//! Guildhall catalog server binary: config, dataset, then serve.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guildhall_config::{Config, ConfigLoad, ConfigLoader};
use guildhall_core::Catalog;
use guildhall_server::{AppState, create_app};

#[derive(Parser, Debug)]
#[command(name = "guildhall-server")]
#[command(about = "Crafting-item catalog server with Discord sign-in")]
struct Cli {
    /// Path to the configuration file (overrides GUILDHALL_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Path to the items dataset (overrides config)
    #[arg(long, env = "ITEMS_PATH")]
    items: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_runtime_config(&cli)?;

    let catalog = Catalog::load(&config.catalog.items_path).with_context(|| {
        format!(
            "failed to load the item catalog from {}",
            config.catalog.items_path.display()
        )
    })?;
    info!(
        items = catalog.len(),
        path = %config.catalog.items_path.display(),
        "catalog loaded"
    );
    if catalog.is_empty() {
        warn!("catalog is empty - every view will render the no-results state");
    }

    let state = AppState::from_parts(config, catalog);
    let host = state.config.server.host.clone();
    let port = state.config.server.port;

    let app = create_app(state);

    info!("Starting Guildhall catalog server on {}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}"))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_runtime_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path.clone());
    }
    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    apply_cli_overrides(&mut config, cli);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }

    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    if config.dev_mode {
        warn!("dev mode enabled - CORS is permissive");
    }

    Ok(config)
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host.clone() {
        config.server.host = host;
    }
    if let Some(items) = cli.items.clone() {
        config.catalog.items_path = items;
    }
}
