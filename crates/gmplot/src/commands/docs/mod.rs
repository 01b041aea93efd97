//! `gmplot docs` subcommand group.

mod format;
mod generate;

use std::path::Path;

use clap::Subcommand;

use format::FormatArgs;
use generate::GenerateArgs;

use crate::error::CliError;

/// Documentation commands.
#[derive(Subcommand)]
pub(crate) enum DocsCommand {
    /// Generate Sphinx reference stubs and the wiki sidebar.
    Generate(GenerateArgs),
    /// Format built Markdown files for the GitHub Wiki, in place.
    Format(FormatArgs),
}

impl DocsCommand {
    /// Execute the docs subcommand.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        match self {
            Self::Generate(args) => args.execute(config_path),
            Self::Format(args) => args.execute(config_path),
        }
    }
}
