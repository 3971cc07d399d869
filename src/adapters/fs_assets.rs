//! Filesystem-backed branding assets.
//!
//! Loads the logo from disk for the presentation layer. Failures are logged
//! and swallowed; branding never blocks an assessment.

use std::path::PathBuf;

use crate::ports::AssetSource;

/// Default logo location relative to the working directory.
const DEFAULT_LOGO_PATH: &str = "logo.png";

/// Loads branding assets from the local filesystem.
#[derive(Debug)]
pub struct FsAssets {
    logo_path: PathBuf,
}

impl FsAssets {
    /// Create an asset source using the default logo path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
        }
    }

    /// Create an asset source with an explicit logo path.
    #[must_use]
    pub fn with_logo_path(path: impl Into<PathBuf>) -> Self {
        Self {
            logo_path: path.into(),
        }
    }
}

impl Default for FsAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FsAssets {
    fn load_logo(&self) -> Option<Vec<u8>> {
        match std::fs::read(&self.logo_path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Logo image not found at {}", self.logo_path.display());
                None
            }
            Err(e) => {
                tracing::warn!("Error loading logo {}: {}", self.logo_path.display(), e);
                None
            }
        }
    }
}
