//! CLI error types.

use gmplot_config::ConfigError;
use gmplot_docs::{DocsError, ManifestError};
use gmplot_drawables::IconError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Icon(#[from] IconError),

    #[error("{0}")]
    Docs(#[from] DocsError),

    #[error("{0}")]
    Manifest(#[from] ManifestError),
}
