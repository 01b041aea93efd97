//! Configuration management for gmplot.
//!
//! Parses `gmplot.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `drawables.icon_dir`
//! - `wiki.url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override marker icon directory.
    pub icon_dir: Option<PathBuf>,
    /// Override coordinate precision.
    pub precision: Option<usize>,
    /// Override the documentation manifest.
    pub manifest: Option<PathBuf>,
    /// Override the generated Sphinx source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the Markdown directory to format.
    pub markdown_dir: Option<PathBuf>,
    /// Override the wiki sidebar file.
    pub sidebar: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "gmplot.toml";

/// Default number of digits after the decimal point for coordinates.
const DEFAULT_PRECISION: usize = 6;

/// Highest precision that still carries meaning for an `f64` coordinate.
const MAX_PRECISION: usize = 15;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Drawables configuration (paths are relative strings from TOML).
    drawables: DrawablesConfigRaw,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Wiki output configuration.
    pub wiki: WikiConfig,

    /// Resolved drawables configuration (set after loading).
    #[serde(skip)]
    pub drawables_resolved: DrawablesConfig,
    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw drawables configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DrawablesConfigRaw {
    icon_dir: Option<String>,
    precision: Option<usize>,
}

/// Resolved drawables configuration.
#[derive(Debug)]
pub struct DrawablesConfig {
    /// Marker icon directory. `None` uses the icons bundled with the binary.
    pub icon_dir: Option<PathBuf>,
    /// Digits after the decimal point for coordinates.
    pub precision: usize,
}

impl Default for DrawablesConfig {
    fn default() -> Self {
        Self {
            icon_dir: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    manifest: Option<String>,
    source_dir: Option<String>,
    markdown_dir: Option<String>,
    sidebar: Option<String>,
    extension: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Registry manifest describing the documented API.
    pub manifest: PathBuf,
    /// Directory the Sphinx source stubs are generated into.
    pub source_dir: PathBuf,
    /// Directory holding the built Markdown to format for the wiki.
    pub markdown_dir: PathBuf,
    /// Wiki `_Sidebar` file.
    pub sidebar: PathBuf,
    /// Extension of generated source stubs.
    pub extension: String,
}

/// Wiki output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Base URL of the wiki, used for relative image links.
    pub url: String,
    /// Width hint for embedded images.
    pub image_width: String,
    /// Language tag for code fences.
    pub code_language: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            url: "https://github.com/gmplot/gmplot/wiki".to_owned(),
            image_width: "100000px".to_owned(),
            code_language: "python".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`wiki.url`").
        field: String,
        /// Error message (e.g., "${`WIKI_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `gmplot.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(icon_dir) = &settings.icon_dir {
            self.drawables_resolved.icon_dir = Some(icon_dir.clone());
        }
        if let Some(precision) = settings.precision {
            self.drawables_resolved.precision = precision;
        }
        if let Some(manifest) = &settings.manifest {
            self.docs_resolved.manifest.clone_from(manifest);
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(markdown_dir) = &settings.markdown_dir {
            self.docs_resolved.markdown_dir.clone_from(markdown_dir);
        }
        if let Some(sidebar) = &settings.sidebar {
            self.docs_resolved.sidebar.clone_from(sidebar);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            drawables: DrawablesConfigRaw::default(),
            docs: DocsConfigRaw::default(),
            wiki: WikiConfig::default(),
            drawables_resolved: DrawablesConfig::default(),
            docs_resolved: DocsConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.wiki.url, "wiki.url")?;
        require_http_url(&self.wiki.url, "wiki.url")?;
        require_non_empty(&self.wiki.image_width, "wiki.image_width")?;
        require_non_empty(&self.docs_resolved.extension, "docs.extension")?;

        if self.drawables_resolved.precision > MAX_PRECISION {
            return Err(ConfigError::Validation(format!(
                "drawables.precision cannot exceed {MAX_PRECISION}"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.wiki.url = expand::expand_env(&self.wiki.url, "wiki.url")?;

        if let Some(ref icon_dir) = self.drawables.icon_dir {
            self.drawables.icon_dir = Some(expand::expand_env(icon_dir, "drawables.icon_dir")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.drawables_resolved = DrawablesConfig {
            icon_dir: self.drawables.icon_dir.as_deref().map(|d| config_dir.join(d)),
            precision: self.drawables.precision.unwrap_or(DEFAULT_PRECISION),
        };

        self.docs_resolved = DocsConfig {
            manifest: resolve(self.docs.manifest.as_deref(), "docs/api.toml"),
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs/source"),
            markdown_dir: resolve(self.docs.markdown_dir.as_deref(), "docs/markdown"),
            sidebar: resolve(self.docs.sidebar.as_deref(), "docs/_Sidebar.md"),
            extension: self
                .docs
                .extension
                .clone()
                .unwrap_or_else(|| "rst".to_owned()),
        };
    }
}
