//! Backend installation directory resolution.
//!
//! The backend ships as a sibling of the gateway binary's install
//! directory. Resolution is a pure function of the executable path and
//! the configuration, so it does not depend on the working directory the
//! process was started from and yields the same directory every time it
//! is called.

use std::path::PathBuf;

use crate::config::BackendConfig;

/// Directory name the backend installs under, next to the gateway's
/// own install directory.
const BACKEND_DIR: &str = "backend";

/// Error type for home resolution.
#[derive(Debug)]
pub enum HomeError {
    /// The path of the running executable could not be determined.
    Executable(std::io::Error),
    /// The executable path has no containing directory.
    NoParent(PathBuf),
}

impl std::fmt::Display for HomeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomeError::Executable(e) => {
                write!(f, "cannot determine executable path: {}", e)
            }
            HomeError::NoParent(path) => {
                write!(f, "executable path {} has no parent directory", path.display())
            }
        }
    }
}

impl std::error::Error for HomeError {}

/// Resolve the backend installation directory.
///
/// The configured `backend.home` override wins. Otherwise the directory
/// is derived from the running executable: the parent of the directory
/// containing the binary, joined with `backend/`.
pub fn backend_home(config: &BackendConfig) -> Result<PathBuf, HomeError> {
    if let Some(home) = &config.home {
        return Ok(PathBuf::from(home));
    }

    let exe = std::env::current_exe().map_err(HomeError::Executable)?;
    let bin_dir = exe
        .parent()
        .ok_or_else(|| HomeError::NoParent(exe.clone()))?;
    let install_root = bin_dir.parent().unwrap_or(bin_dir);

    Ok(install_root.join(BACKEND_DIR))
}
