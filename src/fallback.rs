//! The minimal fallback application.
//!
//! Served for the life of the process when the backend application
//! cannot be acquired. Exposes exactly two read-only diagnostic routes;
//! everything else is 404. Both routes always answer 200 and have no
//! side effects.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

/// Fixed message reported by the root route while degraded.
pub const MINIMAL_MESSAGE: &str = "API is running (minimal mode)";

#[derive(Debug, Serialize)]
struct RootStatus {
    message: &'static str,
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    mode: &'static str,
}

/// Build the fallback application with `error` as its diagnostic text.
pub fn minimal_app(error: &str) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(error.to_string())
}

async fn root(State(error): State<String>) -> Json<RootStatus> {
    Json(RootStatus {
        message: MINIMAL_MESSAGE,
        error,
    })
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        mode: "minimal",
    })
}
