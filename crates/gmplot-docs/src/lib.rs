//! API reference generation and GitHub Wiki formatting for gmplot.
//!
//! Two independent pipelines:
//!
//! - **Reference stubs**: [`DocGenerator`] walks a [`DocRegistry`] of documented
//!   items and writes one Sphinx stub per item plus a wiki `_Sidebar` entry.
//! - **Wiki formatting**: [`format_directory`] rewrites the Markdown produced by
//!   the external doc builder into the wiki's flavor, one file at a time, with
//!   the passes in [`markdown`].
//!
//! # Example
//!
//! ```
//! use gmplot_docs::markdown::{MarkdownStyle, Rewrite, rewrite_document};
//!
//! let input = "### class gmplot.Map(lat, lng)\n\nA map.\n";
//! let Rewrite::Formatted(output) = rewrite_document(input, &MarkdownStyle::default()).unwrap()
//! else {
//!     panic!("expected formatted output");
//! };
//! assert!(output.starts_with("_class_ gmplot.**Map**(_lat, lng_)\n\n---\n"));
//! ```

mod batch;
mod error;
pub mod markdown;
mod registry;
mod sidebar;
mod walker;

pub use batch::{FormatReport, SkippedFile, format_directory};
pub use error::DocsError;
pub use registry::{DocItem, DocRegistry, ItemId, ItemKind, ManifestError};
pub use sidebar::write_sidebar_entry;
pub use walker::{DEFAULT_EXTENSION, DocGenerator, WalkReport, fresh_dir};
