//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use forensics_gateway::bootstrap::{AppBinding, AppRegistry};
use forensics_gateway::config::GatewayConfig;
use forensics_gateway::http::HttpServer;
use forensics_gateway::lifecycle::Shutdown;

/// Write a backend home containing a service manifest naming
/// `application`.
pub fn write_backend_home(home: &Path, application: &str) {
    std::fs::create_dir_all(home).unwrap();
    std::fs::write(
        home.join("service.toml"),
        format!("application = \"{}\"\n", application),
    )
    .unwrap();
}

/// Config pointing the backend home at `home`.
pub fn config_with_home(home: &Path) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.backend.home = Some(home.to_string_lossy().into_owned());
    config
}

/// Establish a binding for `config` and serve it on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; trigger it at the
/// end of the test.
pub async fn spawn_gateway(config: GatewayConfig, registry: AppRegistry) -> (SocketAddr, Shutdown) {
    let binding = AppBinding::establish(&config.backend, &registry);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, binding);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// HTTP client that talks straight to the spawned gateway.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
