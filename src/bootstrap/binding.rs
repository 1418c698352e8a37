//! The one-shot application binding.
//!
//! `establish` runs the whole bootstrap sequence exactly once and fixes
//! the process's application object: either the backend's own router,
//! delegated to unchanged, or the minimal fallback carrying the
//! acquisition error. Nothing downstream re-attempts acquisition.

use axum::Router;

use crate::bootstrap::acquire::{self, AcquireError};
use crate::bootstrap::registry::AppRegistry;
use crate::config::BackendConfig;
use crate::fallback;

/// Serving mode of the process, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The backend application is bound and serves all requests.
    Full,
    /// The fallback application serves diagnostics only.
    Minimal,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Full => "full",
            Mode::Minimal => "minimal",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the bootstrap sequence.
pub enum AppBinding {
    /// The backend application was acquired.
    Ready(Router),
    /// Acquisition failed; the process serves the fallback application.
    Degraded(AcquireError),
}

impl AppBinding {
    /// Run the bootstrap sequence once and bind the outcome.
    pub fn establish(config: &BackendConfig, registry: &AppRegistry) -> Self {
        match acquire::acquire(config, registry) {
            Ok(app) => {
                tracing::info!("Backend application bound");
                AppBinding::Ready(app)
            }
            Err(error) => {
                tracing::warn!(%error, "Backend application unavailable, serving minimal mode");
                AppBinding::Degraded(error)
            }
        }
    }

    /// Serving mode this binding commits the process to.
    pub fn mode(&self) -> Mode {
        match self {
            AppBinding::Ready(_) => Mode::Full,
            AppBinding::Degraded(_) => Mode::Minimal,
        }
    }

    /// The acquisition error, when degraded.
    pub fn degraded_reason(&self) -> Option<&AcquireError> {
        match self {
            AppBinding::Ready(_) => None,
            AppBinding::Degraded(error) => Some(error),
        }
    }

    /// Produce the router the process will serve.
    ///
    /// A ready binding yields the backend application unchanged; a
    /// degraded one yields the fallback application with the error text
    /// embedded.
    pub fn into_router(self) -> Router {
        match self {
            AppBinding::Ready(app) => app,
            AppBinding::Degraded(error) => fallback::minimal_app(&error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use serde_json::Value;
    use tower::ServiceExt;

    fn config_for(home: &std::path::Path) -> BackendConfig {
        BackendConfig {
            home: Some(home.to_string_lossy().into_owned()),
            ..BackendConfig::default()
        }
    }

    #[tokio::test]
    async fn ready_binding_delegates_identity() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("service.toml"), "application = \"forensics\"\n")
            .unwrap();
        let registry = AppRegistry::new().register("forensics", || {
            Router::new().route("/predict", get(|| async { "verdict" }))
        });

        let binding = AppBinding::establish(&config_for(dir.path()), &registry);
        assert_eq!(binding.mode(), Mode::Full);

        let app = binding.into_router();
        let response = app
            .oneshot(Request::get("/predict").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn degraded_binding_serves_the_error_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("service.toml"), "application = \"backend\"\n")
            .unwrap();

        let binding = AppBinding::establish(&config_for(dir.path()), &AppRegistry::new());
        assert_eq!(binding.mode(), Mode::Minimal);
        let reason = binding.degraded_reason().unwrap().to_string();

        let app = binding.into_router();
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["message"], "API is running (minimal mode)");
        assert_eq!(payload["error"], reason.as_str());
    }
}
