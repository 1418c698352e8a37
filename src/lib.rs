//! Serving shim for the Deepfake Forensics API.
//!
//! The gateway produces exactly one runnable application object per
//! process. At startup it resolves the backend installation next to the
//! executable, reads the backend's service manifest, and binds the
//! application constructor registered for that name. When any step of
//! that acquisition fails, the process commits to a minimal two-route
//! diagnostic application for its lifetime instead of crashing the host.
//!
//! ```text
//! Startup:
//!     config → bootstrap (resolve home → read manifest → registry lookup)
//!         → AppBinding::Ready(app) | AppBinding::Degraded(reason)
//!         → middleware stack (timeout, request id, trace, limits, metrics)
//!         → listener → serve until signal
//! ```
//!
//! The binding decision is made once. A degraded process answers
//! `GET /` with the captured error text and `GET /health` with
//! `{"status": "ok", "mode": "minimal"}` until it is restarted.

// Core subsystems
pub mod bootstrap;
pub mod config;
pub mod fallback;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use bootstrap::{AppBinding, AppRegistry, Mode};
pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
