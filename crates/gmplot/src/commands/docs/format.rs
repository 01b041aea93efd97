//! `gmplot docs format` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use gmplot_config::{CliSettings, Config};
use gmplot_docs::format_directory;
use gmplot_docs::markdown::MarkdownStyle;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the docs format command.
#[derive(Args)]
pub(crate) struct FormatArgs {
    /// Directory holding the Markdown files (overrides config).
    directory: Option<PathBuf>,
}

impl FormatArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            markdown_dir: self.directory,
            ..CliSettings::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        let directory = &config.docs_resolved.markdown_dir;

        let style = MarkdownStyle {
            code_language: config.wiki.code_language.clone(),
            wiki_url: config.wiki.url.clone(),
            image_width: config.wiki.image_width.clone(),
            ..MarkdownStyle::default()
        };

        output.info(&format!("Formatting {}", directory.display()));
        let report = format_directory(directory, &style)?;

        for skipped in &report.skipped {
            output.warning(&format!(
                "Warning: left {} untouched: {}",
                skipped.path.display(),
                skipped.reason
            ));
        }
        output.success(&format!(
            "Formatted {} file(s), skipped {}",
            report.formatted.len(),
            report.skipped.len()
        ));
        Ok(())
    }
}
