//! Wiki formatting of a directory of Markdown files.

use std::path::{Path, PathBuf};

use crate::error::DocsError;
use crate::markdown::{MarkdownStyle, Rewrite, rewrite_document};

/// Extension of the files picked up by [`format_directory`].
const MARKDOWN_EXTENSION: &str = ".md";

/// A file left untouched and why.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of formatting a directory.
#[derive(Debug, Default)]
pub struct FormatReport {
    /// Files that were rewritten.
    pub formatted: Vec<PathBuf>,
    /// Files left untouched.
    pub skipped: Vec<SkippedFile>,
}

/// Format every Markdown file directly inside `directory`, in place.
///
/// Files are processed one at a time in filename order. A file that can't be
/// formatted is skipped with a warning and left as it was; a fatal formatting
/// error stops the batch and is returned.
pub fn format_directory(directory: &Path, style: &MarkdownStyle) -> Result<FormatReport, DocsError> {
    let mut paths = Vec::new();
    let entries = std::fs::read_dir(directory).map_err(|e| DocsError::io(directory, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| DocsError::io(directory, e))?;
        let is_markdown = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(MARKDOWN_EXTENSION));
        if is_markdown {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let mut report = FormatReport::default();
    for path in paths {
        let text = std::fs::read_to_string(&path).map_err(|e| DocsError::io(&path, e))?;
        match rewrite_document(&text, style) {
            Ok(Rewrite::Formatted(formatted)) => {
                std::fs::write(&path, formatted).map_err(|e| DocsError::io(&path, e))?;
                tracing::debug!(path = %path.display(), "Formatted");
                report.formatted.push(path);
            }
            Ok(Rewrite::Skipped(reason)) => {
                tracing::warn!(path = %path.display(), reason = %reason, "Skipped Markdown file");
                report.skipped.push(SkippedFile {
                    path,
                    reason: reason.to_string(),
                });
            }
            Err(source) => return Err(DocsError::Rewrite { path, source }),
        }
    }

    tracing::info!(
        formatted = report.formatted.len(),
        skipped = report.skipped.len(),
        "Formatted Markdown directory"
    );
    Ok(report)
}
