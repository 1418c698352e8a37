//! OS signal handling.
//!
//! Translates SIGTERM/SIGINT into the internal shutdown trigger using
//! Tokio's async-safe signal handling.

use crate::lifecycle::Shutdown;

/// Spawn the background task that waits for a termination signal and
/// triggers shutdown.
pub fn spawn_signal_listener(shutdown: Shutdown) {
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate =
        signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupt received");
        }
        _ = terminate.recv() => {
            tracing::info!("Terminate received");
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Interrupt received");
}
