//! CLI command implementations.

pub(crate) mod docs;
pub(crate) mod text;

pub(crate) use docs::DocsCommand;
pub(crate) use text::TextArgs;
