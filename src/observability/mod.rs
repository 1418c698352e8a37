//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; filter overridable through
//!   `RUST_LOG`, config level as the fallback
//! - Metrics exposed on a separate listener so the application's own
//!   route space is never touched
//! - Request IDs flow through logs and responses

pub mod logging;
pub mod metrics;
