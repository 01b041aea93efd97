//! Marker icon images embedded as base64 data URIs.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

/// Directory holding the marker images bundled with this crate.
pub const DEFAULT_ICON_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/markers");

/// Icon loading error.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The icon file does not exist.
    #[error("Icon not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Any other I/O failure while reading the icon.
    #[error("Failed to read icon {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A directory of `<name>.png` marker images.
#[derive(Clone, Debug)]
pub struct MarkerIcons {
    dir: PathBuf,
}

impl MarkerIcons {
    /// Create an icon set rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the image for the named marker.
    #[must_use]
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }

    /// Read the named marker image as an embeddable data URI.
    pub fn embeddable(&self, name: &str) -> Result<String, IconError> {
        embeddable_image(&self.path(name))
    }
}

impl Default for MarkerIcons {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_DIR)
    }
}

/// Read a PNG image and return it as a `data:image/png;base64,...` URL.
pub fn embeddable_image(path: &Path) -> Result<String, IconError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IconError::NotFound(path.to_path_buf())
        } else {
            IconError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Embedding icon");
    Ok(format!(
        "data:image/png;base64,{}",
        BASE64_STANDARD.encode(bytes)
    ))
}
