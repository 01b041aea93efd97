//! Code fence language tagging.

use super::{MarkdownStyle, RewriteError};

/// Marker that opens and closes a literal block.
pub const FENCE: &str = "```";

/// What a line does to the fence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceEvent {
    Open,
    Close,
}

/// Tracks literal block state during line-by-line processing.
///
/// Any line starting with three backticks toggles the state, whatever
/// follows the backticks.
#[derive(Debug, Default)]
pub struct FenceTracker {
    open: bool,
}

impl FenceTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if currently inside a literal block.
    #[must_use]
    pub fn in_fence(&self) -> bool {
        self.open
    }

    /// Update state for one line, returning the fence event it caused.
    pub fn update(&mut self, line: &str) -> Option<FenceEvent> {
        if !line.starts_with(FENCE) {
            return None;
        }
        self.open = !self.open;
        Some(if self.open {
            FenceEvent::Open
        } else {
            FenceEvent::Close
        })
    }
}

/// Tag every opening fence with `language`.
///
/// A literal block left open at the end of the document is an error.
pub fn tag_code_fences(mut lines: Vec<String>, language: &str) -> Result<Vec<String>, RewriteError> {
    let mut tracker = FenceTracker::new();
    for line in &mut lines {
        if tracker.update(line) == Some(FenceEvent::Open) {
            *line = format!("{FENCE}{language}");
        }
    }
    if tracker.in_fence() {
        return Err(RewriteError::UnclosedFence);
    }
    Ok(lines)
}

/// Tag fences that hold HTML output (a first line starting with the style's
/// HTML marker) with the HTML language instead.
pub fn retag_html_fences(mut lines: Vec<String>, style: &MarkdownStyle) -> Vec<String> {
    for index in 1..lines.len() {
        if lines[index].starts_with(&style.html_marker) && lines[index - 1].starts_with(FENCE) {
            lines[index - 1] = format!("{FENCE}{}", style.html_language);
        }
    }
    lines
}
