//! Registry of documentable items.
//!
//! Items are declared up front with an explicit [`ItemKind`] instead of being
//! discovered by inspecting live objects. The registry is an arena: items are
//! addressed by [`ItemId`] and the same item may be linked under several
//! parents, mirroring how one object can be reachable through more than one
//! attribute path.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// What kind of documentation directive an item gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// A function or method (`automethod`).
    Method,
    /// A class (`autoclass`).
    Class,
    /// Anything else (modules, plain attributes). Skipped with a warning.
    Unsupported,
}

impl ItemKind {
    /// Sphinx autodoc directive for this kind, if supported.
    #[must_use]
    pub fn directive(self) -> Option<&'static str> {
        match self {
            Self::Method => Some("automethod"),
            Self::Class => Some("autoclass"),
            Self::Unsupported => None,
        }
    }

    fn from_manifest(kind: &str) -> Self {
        match kind {
            "method" | "function" => Self::Method,
            "class" => Self::Class,
            _ => Self::Unsupported,
        }
    }
}

/// A single documentable item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocItem {
    /// Attribute name (not qualified).
    pub name: String,
    pub kind: ItemKind,
    /// Documentation text. Items without it are not documented.
    pub doc: Option<String>,
}

impl DocItem {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            doc: None,
        }
    }

    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Whether the name marks the item as private.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }
}

/// Handle to an item in a [`DocRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(usize);

#[derive(Debug)]
struct Node {
    item: DocItem,
    children: Vec<ItemId>,
}

/// Tree (or graph, once [`link`](DocRegistry::link) is used) of documented items
/// under a named module.
#[derive(Debug)]
pub struct DocRegistry {
    module: String,
    nodes: Vec<Node>,
    roots: Vec<ItemId>,
}

/// Manifest loading error.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Manifest parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct ManifestRaw {
    module: String,
    #[serde(default)]
    items: Vec<ManifestItem>,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    name: String,
    kind: String,
    doc: Option<String>,
    #[serde(default)]
    children: Vec<ManifestItem>,
}

impl DocRegistry {
    /// Create an empty registry for `module`.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Load a registry from a TOML manifest string.
    pub fn from_manifest_str(manifest: &str) -> Result<Self, ManifestError> {
        let raw: ManifestRaw = toml::from_str(manifest)?;
        let mut registry = Self::new(raw.module);
        for item in raw.items {
            registry.add_manifest_item(None, item);
        }
        Ok(registry)
    }

    /// Load a registry from a TOML manifest file.
    pub fn from_manifest_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_manifest_str(&content)
    }

    fn add_manifest_item(&mut self, parent: Option<ItemId>, raw: ManifestItem) {
        let mut item = DocItem::new(raw.name, ItemKind::from_manifest(&raw.kind));
        item.doc = raw.doc;
        let id = self.add(parent, item);
        for child in raw.children {
            self.add_manifest_item(Some(id), child);
        }
    }

    /// Name of the documented module.
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module
    }

    /// Register an item under `parent`, or at the module root if `None`.
    pub fn add(&mut self, parent: Option<ItemId>, item: DocItem) -> ItemId {
        let id = ItemId(self.nodes.len());
        self.nodes.push(Node {
            item,
            children: Vec::new(),
        });
        self.attach(parent, id);
        id
    }

    /// Expose an already registered item under another parent as well.
    ///
    /// Linking an item under one of its own descendants creates a cycle.
    pub fn link(&mut self, parent: Option<ItemId>, child: ItemId) {
        self.attach(parent, child);
    }

    fn attach(&mut self, parent: Option<ItemId>, child: ItemId) {
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(child),
            None => self.roots.push(child),
        }
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> &DocItem {
        &self.nodes[id.0].item
    }

    /// Children of `parent` in registration order, or the roots if `None`.
    #[must_use]
    pub fn children(&self, parent: Option<ItemId>) -> &[ItemId] {
        match parent {
            Some(parent) => &self.nodes[parent.0].children,
            None => &self.roots,
        }
    }

    #[must_use]
    pub fn roots(&self) -> &[ItemId] {
        &self.roots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
