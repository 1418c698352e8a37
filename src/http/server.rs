//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap the bound application router in the middleware stack
//! - Enforce request timeout and in-flight request limit
//! - Generate and propagate request IDs
//! - Serve on a listener until shutdown is signalled
//!
//! # Design Decisions
//! - The server hosts whatever router the binding produced; it adds no
//!   routes of its own in either mode
//! - Graceful shutdown: stop accepting, let in-flight requests finish

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AppBinding, Mode};
use crate::config::GatewayConfig;
use crate::http::request_id::UuidRequestId;
use crate::observability::metrics;

/// HTTP server hosting the bound application.
pub struct HttpServer {
    router: Router,
    mode: Mode,
}

impl HttpServer {
    /// Create a new server for the given binding.
    pub fn new(config: &GatewayConfig, binding: AppBinding) -> Self {
        let mode = binding.mode();
        metrics::record_mode(mode);

        let router = Self::build_router(config, binding);
        Self { router, mode }
    }

    /// Wrap the bound router in the middleware stack.
    fn build_router(config: &GatewayConfig, binding: AppBinding) -> Router {
        binding.into_router().layer(
            ServiceBuilder::new()
                .layer(GlobalConcurrencyLimitLayer::new(
                    config.listener.max_connections,
                ))
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                )))
                .layer(axum::middleware::from_fn(metrics::track_request))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
    }

    /// Serving mode of the hosted application.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mode = %self.mode,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
