//! HTTP hosting subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (middleware stack: limits, request ID, trace, timeout)
//!     → the bound application router (backend app or fallback)
//!     → response back to client, request ID propagated
//! ```
//!
//! The hosting layer contributes middleware only. Which routes exist is
//! decided entirely by the application binding.

pub mod request_id;
pub mod server;

pub use request_id::{UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
