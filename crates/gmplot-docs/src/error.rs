//! Error types for documentation generation.

use std::path::PathBuf;

use crate::markdown::RewriteError;

/// Documentation pipeline error.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// I/O error on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The sidebar writer failed.
    #[error("Failed to write sidebar: {0}")]
    Sidebar(#[source] std::io::Error),
    /// A Markdown file violated an assumption about the doc builder's output.
    #[error("Failed to format {}: {source}", path.display())]
    Rewrite {
        path: PathBuf,
        #[source]
        source: RewriteError,
    },
}

impl DocsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a missing file or directory.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
