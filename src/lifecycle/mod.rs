//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - The application binding is one-shot, so there is no reload signal:
//!   a degraded process stays degraded until restart

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
