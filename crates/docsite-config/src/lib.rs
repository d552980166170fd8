//! Configuration management for docsite.
//!
//! Parses `docsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! site = "https://apollogeddon.github.io"
//! base = "/ignition-tfpl"
//!
//! [[integrations]]
//! name = "docs-theme"
//!
//! [[integrations]]
//! name = "diagrams"
//!
//! [theme]
//! title = "Ignition TF Plugin"
//!
//! [[theme.social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/apollogeddon/ignition-tfpl"
//!
//! [[theme.sidebar]]
//! label = "Guides"
//! items = [{ label = "Installation", link = "/guides/installation/" }]
//!
//! [[theme.sidebar]]
//! label = "Reference"
//! autogenerate = { directory = "reference" }
//! ```
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site`
//! - `base`
//! - `theme.social[].href`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override URL base path.
    pub base: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsite.toml";

/// Default content directory relative to the config file.
const DEFAULT_SOURCE_DIR: &str = "src/content/docs";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deployed site URL (e.g., `https://apollogeddon.github.io`).
    pub site: String,
    /// URL path prefix applied to every internal link.
    pub base: String,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Build-time extensions in declaration order.
    pub integrations: Vec<IntegrationConfig>,
    /// Documentation theme options.
    pub theme: ThemeConfig,

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

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Content collection directory.
    pub source_dir: PathBuf,
}

/// One `[[integrations]]` entry.
#[derive(Debug, Deserialize, PartialEq)]
pub struct IntegrationConfig {
    /// Extension name (bundled: `docs-theme`, `diagrams`).
    pub name: String,
    /// Hook names; omitted means the bundled preset (or none).
    #[serde(default)]
    pub hooks: Option<Vec<String>>,
    /// Exclusive capabilities; omitted means the bundled preset (or none).
    #[serde(default)]
    pub exclusive: Option<Vec<String>>,
    /// Extension-specific options, passed through untouched.
    #[serde(default)]
    pub options: serde_json::Value,
}

/// Documentation theme options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Site title.
    pub title: String,
    /// Social links shown in the header.
    pub social: Vec<SocialLink>,
    /// Sidebar groups in display order.
    pub sidebar: Vec<SidebarEntryConfig>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            social: Vec::new(),
            sidebar: Vec::new(),
        }
    }
}

/// Social link (`{ icon, label, href }`).
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    /// Icon name (e.g., `github`).
    pub icon: String,
    /// Accessible label.
    pub label: String,
    /// Target URL.
    pub href: String,
}

/// Sidebar group as written in TOML.
///
/// Exactly one of `items` and `autogenerate` must be set; see
/// [`SidebarEntryConfig::content`].
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct SidebarEntryConfig {
    /// Group label.
    pub label: String,
    /// Explicit links.
    #[serde(default)]
    pub items: Option<Vec<SidebarLinkConfig>>,
    /// Directory autogeneration.
    #[serde(default)]
    pub autogenerate: Option<AutogenerateConfig>,
}

/// Explicit sidebar link.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct SidebarLinkConfig {
    /// Display label.
    pub label: String,
    /// Link target.
    pub link: String,
}

/// `autogenerate = { directory = "..." }`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct AutogenerateConfig {
    /// Directory relative to the content root.
    pub directory: String,
}

/// Validated view of a sidebar group's content.
#[derive(Debug, PartialEq, Eq)]
pub enum SidebarContent<'a> {
    /// Explicit links.
    Items(&'a [SidebarLinkConfig]),
    /// Directory autogeneration.
    Autogenerate(&'a AutogenerateConfig),
}

impl SidebarEntryConfig {
    /// Group content, or `None` when neither or both forms are set.
    #[must_use]
    pub fn content(&self) -> Option<SidebarContent<'_>> {
        match (&self.items, &self.autogenerate) {
            (Some(items), None) => Some(SidebarContent::Items(items)),
            (None, Some(auto)) => Some(SidebarContent::Autogenerate(auto)),
            _ => None,
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
        /// Config field path (e.g., "`theme.social[0].href`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
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
    /// Otherwise, searches for `docsite.toml` in current directory and parents.
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
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Relative paths are resolved against `config_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, env expansion, or validation fails.
    pub fn from_toml(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;
        config.resolve_paths(config_dir);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base) = &settings.base {
            self.base.clone_from(base);
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
        Self {
            site: String::new(),
            base: String::new(),
            docs: DocsConfigRaw::default(),
            integrations: Vec::new(),
            theme: ThemeConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join(DEFAULT_SOURCE_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_integrations()?;
        self.validate_theme()?;
        Ok(())
    }

    /// Validate `site` and `base`.
    fn validate_site(&self) -> Result<(), ConfigError> {
        if !self.site.is_empty() {
            require_http_url(&self.site, "site")?;
        }
        if self.base.contains("://") {
            return Err(ConfigError::Validation(
                "base must be a URL path, not a full URL".to_owned(),
            ));
        }
        if self.base.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "base cannot contain whitespace".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validate integration entries.
    fn validate_integrations(&self) -> Result<(), ConfigError> {
        for (i, integration) in self.integrations.iter().enumerate() {
            require_non_empty(&integration.name, &format!("integrations[{i}].name"))?;
        }
        Ok(())
    }

    /// Validate theme options and sidebar shape.
    fn validate_theme(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.theme.title, "theme.title")?;

        for (i, social) in self.theme.social.iter().enumerate() {
            require_non_empty(&social.label, &format!("theme.social[{i}].label"))?;
            require_http_url(&social.href, &format!("theme.social[{i}].href"))?;
        }

        for (i, group) in self.theme.sidebar.iter().enumerate() {
            let field = format!("theme.sidebar[{i}]");
            require_non_empty(&group.label, &format!("{field}.label"))?;
            match group.content() {
                Some(SidebarContent::Items(items)) => {
                    for (j, item) in items.iter().enumerate() {
                        require_non_empty(&item.label, &format!("{field}.items[{j}].label"))?;
                        require_non_empty(&item.link, &format!("{field}.items[{j}].link"))?;
                    }
                }
                Some(SidebarContent::Autogenerate(_)) => {}
                None => {
                    return Err(ConfigError::Validation(format!(
                        "{field} ('{}') must set exactly one of items or autogenerate",
                        group.label
                    )));
                }
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_field(&mut self.site, "site")?;
        expand::expand_field(&mut self.base, "base")?;
        for (i, social) in self.theme.social.iter_mut().enumerate() {
            expand::expand_field(&mut social.href, &format!("theme.social[{i}].href"))?;
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dir = self
            .docs
            .source_dir
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE_DIR);
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(source_dir),
        };
    }
}
