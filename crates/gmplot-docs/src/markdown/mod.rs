//! Wiki formatting for Markdown generated by the doc builder.
//!
//! A document is handled as a list of lines (without terminators) and pushed
//! through a fixed sequence of passes. Each pass takes the lines and returns
//! the rewritten lines, so every pass can be used and tested on its own:
//!
//! 1. [`format_signature_header`]: `### class gmplot.Map(a, b)` becomes
//!    `_class_ gmplot.**Map**(_a, b_)`
//! 2. [`insert_title_rule`]: a horizontal rule below the header
//! 3. [`fuse_optional_parameters`]: `Optional:` + `* **Parameters**` becomes
//!    `* **Optional Parameters**`
//! 4. [`format_parameter_types`]: parameter types become code literals
//! 5. [`fuse_return_type`]: `* **Return type**` is folded into `* **Returns**`
//! 6. [`tag_code_fences`]: opening fences get the default language
//! 7. [`retag_html_fences`]: fences around HTML output get `html`
//! 8. [`normalize_image_links`]: images become full-width wiki embeds

mod fence;
mod header;
mod image;
mod sections;

pub use fence::{FENCE, FenceEvent, FenceTracker, retag_html_fences, tag_code_fences};
pub use header::{format_signature_header, insert_title_rule, pretty_format_signature_header};
pub use image::normalize_image_links;
pub use sections::{
    OPTIONAL_MARKER, OPTIONAL_PARAMETERS_HEADER, PARAMETERS_HEADER, RETURN_TYPE_HEADER,
    RETURNS_HEADER, fuse_optional_parameters, fuse_return_type, format_parameter_types,
};

/// Character that delimits inline code.
pub(crate) const CODE_LITERAL: &str = "`";

/// Output flavor for the formatted Markdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkdownStyle {
    /// Language tag for opening code fences.
    pub code_language: String,
    /// Language tag for fences that hold HTML output.
    pub html_language: String,
    /// Line prefix that identifies HTML output inside a fence.
    pub html_marker: String,
    /// Base URL that relative image links are resolved against.
    pub wiki_url: String,
    /// Width hint for embedded images.
    pub image_width: String,
}

impl Default for MarkdownStyle {
    fn default() -> Self {
        Self {
            code_language: "python".to_owned(),
            html_language: "html".to_owned(),
            html_marker: "-> <html>".to_owned(),
            wiki_url: "https://github.com/gmplot/gmplot/wiki".to_owned(),
            image_width: "100000px".to_owned(),
        }
    }
}

/// Why a document could not be formatted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    /// The document has no lines.
    #[error("document is empty")]
    EmptyDocument,
    /// The first line isn't a signature header.
    #[error("couldn't parse signature header `{0}`")]
    MalformedHeader(String),
    /// A code fence is never closed.
    #[error("unclosed literal block")]
    UnclosedFence,
    /// `Return type` was emitted without a `Returns` section.
    #[error("'Returns' header must exist if 'Return type' header exists")]
    ReturnTypeWithoutReturns,
    /// `Return type` header has nothing below it.
    #[error("'Return type' header must have some content below it")]
    ReturnTypeWithoutContent,
}

impl RewriteError {
    /// Fatal errors mean the doc builder's output broke an assumption and the
    /// whole run should stop. Everything else only skips the document.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ReturnTypeWithoutReturns | Self::ReturnTypeWithoutContent
        )
    }
}

/// Outcome of formatting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The formatted document.
    Formatted(String),
    /// The document should be left untouched.
    Skipped(RewriteError),
}

/// Run every pass over `lines`, in order.
pub fn rewrite_lines(lines: Vec<String>, style: &MarkdownStyle) -> Result<Vec<String>, RewriteError> {
    if lines.is_empty() {
        return Err(RewriteError::EmptyDocument);
    }
    let lines = format_signature_header(lines)?;
    let lines = insert_title_rule(lines);
    let lines = fuse_optional_parameters(lines);
    let lines = format_parameter_types(lines);
    let lines = fuse_return_type(lines)?;
    let lines = tag_code_fences(lines, &style.code_language)?;
    let lines = retag_html_fences(lines, style);
    Ok(normalize_image_links(lines, style))
}

/// Format a whole document.
///
/// Non-fatal problems are reported as [`Rewrite::Skipped`]; only fatal errors
/// (see [`RewriteError::is_fatal`]) are returned as `Err`.
pub fn rewrite_document(text: &str, style: &MarkdownStyle) -> Result<Rewrite, RewriteError> {
    match rewrite_lines(to_lines(text), style) {
        Ok(lines) => {
            let mut output = lines.join("\n");
            if text.ends_with('\n') {
                output.push('\n');
            }
            Ok(Rewrite::Formatted(output))
        }
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => Ok(Rewrite::Skipped(err)),
    }
}

/// Wrap `string` in `fragment` on both ends.
///
/// Empty strings stay empty and already wrapped strings are returned as is.
///
/// # Examples
///
/// ```
/// use gmplot_docs::markdown::bookend;
///
/// assert_eq!(bookend("int", "`"), "`int`");
/// assert_eq!(bookend("`int`", "`"), "`int`");
/// assert_eq!(bookend("", "**"), "");
/// ```
#[must_use]
pub fn bookend(string: &str, fragment: &str) -> String {
    if string.is_empty() {
        return String::new();
    }
    if string.starts_with(fragment) && string.ends_with(fragment) {
        return string.to_owned();
    }
    format!("{fragment}{string}{fragment}")
}

/// Remove every `character` from `string` except escaped ones (`\` + character).
///
/// # Examples
///
/// ```
/// use gmplot_docs::markdown::strip_unescaped;
///
/// assert_eq!(strip_unescaped(r"*\*args*", '*'), r"\*args");
/// ```
#[must_use]
pub fn strip_unescaped(string: &str, character: char) -> String {
    let escaped = format!("\\{character}");
    string
        .split(escaped.as_str())
        .map(|fragment| fragment.replace(character, ""))
        .collect::<Vec<_>>()
        .join(escaped.as_str())
}

/// Split a line into its leading spaces and the rest.
pub(crate) fn split_indent(line: &str) -> (&str, &str) {
    let content = line.trim_start_matches(' ');
    (&line[..line.len() - content.len()], content)
}

/// Whether a line holds only whitespace.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split text into lines without terminators.
pub(crate) fn to_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}
