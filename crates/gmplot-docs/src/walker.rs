//! Sphinx stub generation by walking a [`DocRegistry`].

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::DocsError;
use crate::registry::{DocRegistry, ItemId};
use crate::sidebar::write_sidebar_entry;

/// Extension of generated Sphinx source files.
pub const DEFAULT_EXTENSION: &str = "rst";

/// Result of a registry walk.
#[derive(Debug, Default)]
pub struct WalkReport {
    /// Extension of the generated source files.
    pub extension: String,
    /// Qualified names of the generated items, in discovery order.
    pub generated: Vec<String>,
    /// Items that were skipped with a warning.
    pub warnings: Vec<String>,
}

/// Writes one Sphinx source file per documented item and a matching sidebar link.
///
/// # Example
///
/// ```
/// use gmplot_docs::{DocGenerator, DocItem, DocRegistry, ItemKind};
///
/// let mut registry = DocRegistry::new("gmplot");
/// registry.add(None, DocItem::new("Map", ItemKind::Class).with_doc("A map."));
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut sidebar = Vec::new();
/// let report = DocGenerator::new(&registry, dir.path(), &mut sidebar).run().unwrap();
///
/// assert_eq!(report.generated, vec!["Map".to_owned()]);
/// assert!(dir.path().join("Map.rst").exists());
/// ```
pub struct DocGenerator<'a, W: Write> {
    registry: &'a DocRegistry,
    doc_directory: PathBuf,
    sidebar: W,
    extension: String,
}

impl<'a, W: Write> DocGenerator<'a, W> {
    pub fn new(registry: &'a DocRegistry, doc_directory: impl Into<PathBuf>, sidebar: W) -> Self {
        Self {
            registry,
            doc_directory: doc_directory.into(),
            sidebar,
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }

    /// Use a different source file extension (without the leading dot).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Walk the registry depth-first, generating files and sidebar entries.
    pub fn run(mut self) -> Result<WalkReport, DocsError> {
        let mut report = WalkReport {
            extension: self.extension.clone(),
            ..WalkReport::default()
        };
        let mut ancestry = Vec::new();
        let mut on_path = HashSet::new();
        self.recurse(None, &mut ancestry, &mut on_path, &mut report)?;
        self.sidebar.flush().map_err(DocsError::Sidebar)?;

        tracing::info!(
            module = self.registry.module_name(),
            generated = report.generated.len(),
            skipped = report.warnings.len(),
            "Generated reference stubs"
        );
        Ok(report)
    }

    fn recurse(
        &mut self,
        parent: Option<ItemId>,
        ancestry: &mut Vec<String>,
        on_path: &mut HashSet<ItemId>,
        report: &mut WalkReport,
    ) -> Result<(), DocsError> {
        let registry = self.registry;
        for &id in registry.children(parent) {
            let item = registry.item(id);
            if item.is_private() || item.doc.is_none() {
                continue;
            }

            let full_name = qualified_name(ancestry, &item.name);

            let Some(directive) = item.kind.directive() else {
                tracing::warn!(item = %full_name, "Item type isn't supported in documentation");
                report
                    .warnings
                    .push(format!("`{full_name}`'s type isn't supported in documentation"));
                continue;
            };

            if on_path.contains(&id) {
                tracing::warn!(item = %full_name, "Item refers back to one of its ancestors");
                report
                    .warnings
                    .push(format!("`{full_name}` refers back to one of its ancestors"));
                continue;
            }

            self.write_source_file(&full_name, directive)?;
            write_sidebar_entry(&mut self.sidebar, &item.name, Some(&full_name), ancestry.len())
                .map_err(DocsError::Sidebar)?;
            report.generated.push(full_name);

            on_path.insert(id);
            ancestry.push(item.name.clone());
            let result = self.recurse(Some(id), ancestry, on_path, report);
            ancestry.pop();
            on_path.remove(&id);
            result?;
        }
        Ok(())
    }

    fn write_source_file(&self, full_name: &str, directive: &str) -> Result<(), DocsError> {
        let path = self
            .doc_directory
            .join(format!("{full_name}.{}", self.extension));
        let content = format!(
            ":orphan:\n\n.. {directive}:: {}::{full_name}\n",
            self.registry.module_name()
        );
        tracing::debug!(path = %path.display(), "Writing reference stub");
        std::fs::write(&path, content).map_err(|e| DocsError::io(path, e))
    }
}

fn qualified_name(ancestry: &[String], name: &str) -> String {
    let mut full_name = ancestry.join(".");
    if !full_name.is_empty() {
        full_name.push('.');
    }
    full_name.push_str(name);
    full_name
}

/// Delete `path` if it exists, recreate it empty and return its absolute form.
pub fn fresh_dir(path: &Path) -> Result<PathBuf, DocsError> {
    let absolute = std::path::absolute(path).map_err(|e| DocsError::io(path, e))?;
    if absolute.exists() {
        std::fs::remove_dir_all(&absolute).map_err(|e| DocsError::io(&absolute, e))?;
    }
    std::fs::create_dir_all(&absolute).map_err(|e| DocsError::io(&absolute, e))?;
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::registry::{DocItem, ItemKind};

    fn sample_registry() -> DocRegistry {
        let mut registry = DocRegistry::new("gmplot");
        let plotter = registry.add(
            None,
            DocItem::new("GoogleMapPlotter", ItemKind::Class).with_doc("Plotter."),
        );
        registry.add(
            Some(plotter),
            DocItem::new("text", ItemKind::Method).with_doc("Plot text."),
        );
        registry.add(
            Some(plotter),
            DocItem::new("_private", ItemKind::Method).with_doc("Hidden."),
        );
        registry.add(Some(plotter), DocItem::new("undocumented", ItemKind::Method));
        registry.add(
            Some(plotter),
            DocItem::new("zoom", ItemKind::Unsupported).with_doc("Zoom level."),
        );
        registry
    }

    #[test]
    fn test_generates_stubs_and_sidebar() {
        let registry = sample_registry();
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sidebar = Vec::new();

        let report = DocGenerator::new(&registry, temp_dir.path(), &mut sidebar)
            .run()
            .unwrap();

        assert_eq!(report.extension, "rst");
        assert_eq!(
            report.generated,
            vec!["GoogleMapPlotter".to_owned(), "GoogleMapPlotter.text".to_owned()]
        );
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("GoogleMapPlotter.zoom"));

        let class_stub =
            std::fs::read_to_string(temp_dir.path().join("GoogleMapPlotter.rst")).unwrap();
        assert_eq!(
            class_stub,
            ":orphan:\n\n.. autoclass:: gmplot::GoogleMapPlotter\n"
        );
        let method_stub =
            std::fs::read_to_string(temp_dir.path().join("GoogleMapPlotter.text.rst")).unwrap();
        assert_eq!(
            method_stub,
            ":orphan:\n\n.. automethod:: gmplot::GoogleMapPlotter.text\n"
        );
        assert!(!temp_dir.path().join("GoogleMapPlotter._private.rst").exists());
        assert!(!temp_dir.path().join("GoogleMapPlotter.zoom.rst").exists());

        assert_eq!(
            String::from_utf8(sidebar).unwrap(),
            "**[[GoogleMapPlotter]]**\n\n* [[text|GoogleMapPlotter.text]]\n"
        );
    }

    #[test]
    fn test_custom_extension() {
        let mut registry = DocRegistry::new("gmplot");
        registry.add(None, DocItem::new("Map", ItemKind::Class).with_doc("A map."));
        let temp_dir = tempfile::tempdir().unwrap();

        let report = DocGenerator::new(&registry, temp_dir.path(), Vec::new())
            .with_extension("txt")
            .run()
            .unwrap();

        assert_eq!(report.extension, "txt");
        assert!(temp_dir.path().join("Map.txt").exists());
    }

    #[test]
    fn test_unsupported_items_are_not_descended() {
        let mut registry = DocRegistry::new("gmplot");
        let module = registry.add(
            None,
            DocItem::new("color", ItemKind::Unsupported).with_doc("Colors."),
        );
        registry.add(
            Some(module),
            DocItem::new("to_hex", ItemKind::Method).with_doc("Convert."),
        );
        let temp_dir = tempfile::tempdir().unwrap();

        let report = DocGenerator::new(&registry, temp_dir.path(), Vec::new())
            .run()
            .unwrap();

        assert!(report.generated.is_empty());
    }

    #[test]
    fn test_cycle_is_not_reentered() {
        let mut registry = DocRegistry::new("gmplot");
        let outer = registry.add(None, DocItem::new("Outer", ItemKind::Class).with_doc("Outer."));
        let inner = registry.add(
            Some(outer),
            DocItem::new("Inner", ItemKind::Class).with_doc("Inner."),
        );
        registry.link(Some(inner), outer);
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sidebar = Vec::new();

        let report = DocGenerator::new(&registry, temp_dir.path(), &mut sidebar)
            .run()
            .unwrap();

        assert_eq!(
            report.generated,
            vec!["Outer".to_owned(), "Outer.Inner".to_owned()]
        );
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Outer.Inner.Outer"));
    }

    #[test]
    fn test_shared_item_documented_under_each_parent() {
        let mut registry = DocRegistry::new("gmplot");
        let helper = registry.add(None, DocItem::new("helper", ItemKind::Method).with_doc("Help."));
        let class = registry.add(None, DocItem::new("Map", ItemKind::Class).with_doc("A map."));
        registry.link(Some(class), helper);
        let temp_dir = tempfile::tempdir().unwrap();

        let report = DocGenerator::new(&registry, temp_dir.path(), Vec::new())
            .run()
            .unwrap();

        assert_eq!(
            report.generated,
            vec!["helper".to_owned(), "Map".to_owned(), "Map.helper".to_owned()]
        );
    }

    #[test]
    fn test_missing_output_directory() {
        let registry = sample_registry();
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = DocGenerator::new(&registry, &missing, Vec::new())
            .run()
            .unwrap_err();

        assert!(err.is_not_found(), "Expected not found, got {err:?}");
    }

    struct BrokenSidebar;

    impl Write for BrokenSidebar {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sidebar is read-only"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sidebar_failure_is_reported_as_sidebar_error() {
        let registry = sample_registry();
        let temp_dir = tempfile::tempdir().unwrap();

        let err = DocGenerator::new(&registry, temp_dir.path(), BrokenSidebar)
            .run()
            .unwrap_err();

        assert!(
            matches!(err, DocsError::Sidebar(_)),
            "Expected sidebar error, got {err:?}"
        );
        assert!(err.to_string().starts_with("Failed to write sidebar"));
    }

    #[test]
    fn test_fresh_dir_clears_contents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("source");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("stale.rst"), "old").unwrap();

        let path = fresh_dir(&target).unwrap();

        assert!(path.is_absolute());
        assert!(path.is_dir());
        assert_eq!(std::fs::read_dir(&path).unwrap().count(), 0);
    }
}
