//! `gmplot docs generate` command implementation.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Args;
use gmplot_config::{CliSettings, Config};
use gmplot_docs::{DocGenerator, DocRegistry, DocsError, fresh_dir};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the docs generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// API manifest to generate stubs for (overrides config).
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Directory to generate the stubs into; recreated on every run (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Wiki sidebar file to write (overrides config).
    #[arg(short, long)]
    sidebar: Option<PathBuf>,
}

impl GenerateArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            manifest: self.manifest,
            source_dir: self.output_dir,
            sidebar: self.sidebar,
            ..CliSettings::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        let docs = &config.docs_resolved;

        let registry = DocRegistry::from_manifest_file(&docs.manifest)?;
        tracing::debug!(
            module = registry.module_name(),
            items = registry.len(),
            "Loaded API manifest"
        );
        let source_dir = fresh_dir(&docs.source_dir)?;
        output.info(&format!("Manifest: {}", docs.manifest.display()));
        output.info(&format!("Output: {}", source_dir.display()));

        let sidebar = create_sidebar(&docs.sidebar)?;
        let report = DocGenerator::new(&registry, &source_dir, BufWriter::new(sidebar))
            .with_extension(docs.extension.as_str())
            .run()?;

        for warning in &report.warnings {
            output.warning(&format!("Warning: {warning}"));
        }
        output.success(&format!(
            "Generated {} .{} file(s) and {}",
            report.generated.len(),
            report.extension,
            docs.sidebar.display()
        ));
        Ok(())
    }
}

fn create_sidebar(path: &Path) -> Result<File, DocsError> {
    let to_error = |source| DocsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    File::create(path).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sidebar_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("wiki/_Sidebar.md");

        create_sidebar(&path).unwrap();

        assert!(path.exists());
    }
}
