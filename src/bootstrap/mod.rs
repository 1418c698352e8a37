//! Application bootstrap subsystem.
//!
//! # Data Flow
//! ```text
//! home.rs:
//!     config override | executable location
//!     → backend installation directory
//!
//! acquire.rs:
//!     <home>/service.toml → ServiceManifest
//!     → registry.rs lookup → application Router
//!
//! binding.rs:
//!     acquire once → Ready(app) | Degraded(reason)
//!     → hosting layer dispatches on the variant
//! ```
//!
//! # Design Decisions
//! - The backend constructor is injected through `AppRegistry`; the
//!   gateway itself links no backend and never inspects the application
//! - Acquisition runs exactly once per process; a degraded outcome is
//!   permanent until restart
//! - The acquisition error's `Display` text is the diagnostic served by
//!   the fallback application

pub mod acquire;
pub mod binding;
pub mod home;
pub mod registry;

pub use acquire::{AcquireError, ServiceManifest};
pub use binding::{AppBinding, Mode};
pub use registry::AppRegistry;
