//! Application acquisition.
//!
//! Reads the backend's service manifest and resolves the application
//! constructor it names. Every failure here carries enough context to be
//! served verbatim as the fallback application's diagnostic text.

use std::fs;
use std::path::PathBuf;

use axum::Router;
use serde::Deserialize;
use thiserror::Error;

use crate::bootstrap::home::{self, HomeError};
use crate::bootstrap::registry::AppRegistry;
use crate::config::BackendConfig;

/// The backend's service manifest, read from `<home>/service.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceManifest {
    /// Name of the application object this backend exposes.
    pub application: String,
}

/// Error type for application acquisition.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("backend home could not be resolved: {0}")]
    Home(#[from] HomeError),

    #[error("failed to read backend manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid backend manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no application named `{0}` is linked into this build")]
    Unregistered(String),
}

/// Attempt to acquire the backend application object.
///
/// Resolves the backend home, loads its manifest, and constructs the
/// application registered under the manifest's name.
pub fn acquire(config: &BackendConfig, registry: &AppRegistry) -> Result<Router, AcquireError> {
    let home = home::backend_home(config)?;
    let path = home.join(&config.manifest);

    let content = fs::read_to_string(&path).map_err(|source| AcquireError::ManifestRead {
        path: path.clone(),
        source,
    })?;
    let manifest: ServiceManifest =
        toml::from_str(&content).map_err(|source| AcquireError::ManifestParse {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(
        application = %manifest.application,
        manifest = %path.display(),
        "Backend manifest loaded"
    );

    match registry.construct(&manifest.application) {
        Some(app) => Ok(app),
        None => Err(AcquireError::Unregistered(manifest.application)),
    }
}
