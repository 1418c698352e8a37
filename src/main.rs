//! Process entrypoint for the forensics gateway.
//!
//! Loads configuration, establishes the application binding exactly
//! once, and serves it until a termination signal arrives. The binding
//! decides the process's fate: the backend application when acquisition
//! succeeds, the minimal diagnostic application for the rest of the
//! process lifetime when it does not.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use forensics_gateway::bootstrap::{AppBinding, AppRegistry};
use forensics_gateway::config::loader;
use forensics_gateway::http::HttpServer;
use forensics_gateway::lifecycle::{signals, Shutdown};
use forensics_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "forensics-gateway")]
#[command(about = "Serving shim for the Deepfake Forensics API", long_about = None)]
struct Cli {
    /// Path to the gateway configuration file.
    #[arg(short, long, default_value = "gateway.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = loader::load_or_default(&cli.config)?;

    logging::init(&config.observability);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        "forensics-gateway starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    // Deployment builds register the forensics backend application here.
    let registry = AppRegistry::new();
    let binding = AppBinding::establish(&config.backend, &registry);
    tracing::info!(mode = %binding.mode(), "Application binding established");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(&config, binding);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
