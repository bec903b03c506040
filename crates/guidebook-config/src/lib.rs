//! Configuration management for guidebook.
//!
//! Parses `guidebook.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! The guide list order in the config file is the navigation order of
//! the generated site: each guide links to the entry that follows it.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "guidebook.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override guide source directory (relative to the project root).
    pub source_dir: Option<String>,
    /// Override guide output directory (relative to the project root).
    pub output_dir: Option<String>,
    /// Override continue-on-error flag.
    pub continue_on_error: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site and renderer settings.
    pub site: SiteConfig,
    /// Path configuration (paths are relative strings from TOML).
    paths: PathsConfigRaw,
    /// Ordered guide list. Position defines the "next section" links.
    pub guides: Vec<GuideEntry>,
    /// Standalone posts with explicit source and destination paths.
    pub posts: Vec<PostEntry>,

    /// Resolved path configuration (set after loading).
    #[serde(skip)]
    pub paths_resolved: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site and renderer settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown on the index page.
    pub title: String,
    /// Site description, shown on the index page.
    pub description: String,
    /// Base URL of the Markdown rendering API.
    pub endpoint: String,
    /// Repository context string sent with every render request.
    pub context: String,
    /// HTTP timeout for render requests, in seconds.
    pub timeout_secs: u64,
    /// Keep building remaining pages when one page fails.
    pub continue_on_error: bool,
    /// Write an index page listing all guides.
    pub write_index: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            endpoint: "https://api.github.com".to_owned(),
            context: String::new(),
            timeout_secs: 30,
            continue_on_error: false,
            write_index: true,
        }
    }
}

/// Raw path configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PathsConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
}

/// Resolved path configuration.
///
/// `source_dir` and `output_dir` stay relative so they can be handed to
/// a storage backend rooted at `project_dir`.
#[derive(Debug, Default, Clone)]
pub struct PathsConfig {
    /// Project root (the directory containing the config file).
    pub project_dir: PathBuf,
    /// Directory containing one `<name>/README.md` per guide,
    /// relative to the project root.
    pub source_dir: String,
    /// Directory receiving one `<name>/index.html` per guide,
    /// relative to the project root.
    pub output_dir: String,
}

/// One guide page in navigation order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GuideEntry {
    /// Unique name, used as the path segment for source and output.
    pub name: String,
    /// Title shown in navigation links and the index listing.
    pub title: String,
    /// Optional page description.
    #[serde(default)]
    pub description: Option<String>,
}

/// One standalone post.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PostEntry {
    /// Markdown source path, relative to the config file.
    pub source: String,
    /// Output path, relative to the config file.
    pub destination: String,
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
    /// Otherwise, searches for `guidebook.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
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

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.paths_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.paths_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(continue_on_error) = settings.continue_on_error {
            self.site.continue_on_error = continue_on_error;
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
            site: SiteConfig::default(),
            paths: PathsConfigRaw::default(),
            guides: Vec::new(),
            posts: Vec::new(),
            paths_resolved: PathsConfig {
                project_dir: base.to_path_buf(),
                source_dir: "guides".to_owned(),
                output_dir: "site".to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Resolve path configuration against the config file directory.
    fn resolve_paths(&mut self, base: &Path) {
        let source = self.paths.source_dir.as_deref().unwrap_or("guides");
        let output = self.paths.output_dir.as_deref().unwrap_or("site");
        self.paths_resolved = PathsConfig {
            project_dir: base.to_path_buf(),
            source_dir: source.to_owned(),
            output_dir: output.to_owned(),
        };
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.endpoint, "site.endpoint")?;
        require_http_url(&self.site.endpoint, "site.endpoint")?;
        if self.site.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "site.timeout_secs must be greater than zero".into(),
            ));
        }
        self.validate_guides()?;
        self.validate_posts()?;
        Ok(())
    }

    /// Validate the guide list: non-empty fields, unique names.
    fn validate_guides(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for guide in &self.guides {
            require_non_empty(&guide.name, "guides.name")?;
            require_non_empty(&guide.title, "guides.title")?;
            if !seen.insert(guide.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate guide name: {}",
                    guide.name
                )));
            }
        }
        Ok(())
    }

    /// Validate the post list.
    fn validate_posts(&self) -> Result<(), ConfigError> {
        for post in &self.posts {
            require_non_empty(&post.source, "posts.source")?;
            require_non_empty(&post.destination, "posts.destination")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::io::Write;

    use super::*;

    const FULL_CONFIG: &str = r#"
[site]
title = "Introduction to 64-bit Assembly Language"
description = "An introduction to x86-64 assembly on Linux."
endpoint = "https://api.example.com"
context = "briansteffens/guides"
timeout_secs = 10
continue_on_error = true
write_index = false

[paths]
source_dir = "repo"
output_dir = "introduction-to-64-bit-assembly"

[[guides]]
name = "01-hello-world"
title = "Hello, world!"

[[guides]]
name = "02-run-script"
title = "Run script"
description = "Scripting the build"

[[posts]]
source = "blog/from-math-to-machine/post.md"
destination = "_posts/2017-02-20-from-math-to-machine.md"
"#;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn load_full_config() {
        let (dir, path) = write_config(FULL_CONFIG);
        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Introduction to 64-bit Assembly Language");
        assert_eq!(config.site.endpoint, "https://api.example.com");
        assert_eq!(config.site.context, "briansteffens/guides");
        assert_eq!(config.site.timeout_secs, 10);
        assert!(config.site.continue_on_error);
        assert!(!config.site.write_index);
        assert_eq!(config.paths_resolved.project_dir, dir.path());
        assert_eq!(config.paths_resolved.source_dir, "repo");
        assert_eq!(
            config.paths_resolved.output_dir,
            "introduction-to-64-bit-assembly"
        );
        assert_eq!(config.guides.len(), 2);
        assert_eq!(config.guides[0].name, "01-hello-world");
        assert_eq!(config.guides[1].description.as_deref(), Some("Scripting the build"));
        assert_eq!(config.posts.len(), 1);
    }

    #[test]
    fn defaults_when_sections_missing() {
        let (dir, path) = write_config("[[guides]]\nname = \"a\"\ntitle = \"A\"\n");
        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.endpoint, "https://api.github.com");
        assert_eq!(config.site.timeout_secs, 30);
        assert!(!config.site.continue_on_error);
        assert!(config.site.write_index);
        assert_eq!(config.paths_resolved.project_dir, dir.path());
        assert_eq!(config.paths_resolved.source_dir, "guides");
        assert_eq!(config.paths_resolved.output_dir, "site");
    }

    #[test]
    fn missing_explicit_config_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(&missing), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn duplicate_guide_names_rejected() {
        let (_dir, path) = write_config(
            "[[guides]]\nname = \"a\"\ntitle = \"A\"\n\n[[guides]]\nname = \"a\"\ntitle = \"B\"\n",
        );
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("duplicate guide name"));
    }

    #[test]
    fn empty_guide_name_rejected() {
        let (_dir, path) = write_config("[[guides]]\nname = \"\"\ntitle = \"A\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("guides.name"));
    }

    #[test]
    fn non_http_endpoint_rejected() {
        let (_dir, path) = write_config("[site]\nendpoint = \"ftp://example.com\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("site.endpoint"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let (_dir, path) = write_config("[site]\ntimeout_secs = 0\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn empty_post_destination_rejected() {
        let (_dir, path) =
            write_config("[[posts]]\nsource = \"blog/post.md\"\ndestination = \"\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("posts.destination"));
    }

    #[test]
    fn cli_settings_override_config() {
        let (_dir, path) = write_config(FULL_CONFIG);
        let settings = CliSettings {
            source_dir: Some("sources".to_owned()),
            output_dir: Some("public".to_owned()),
            continue_on_error: Some(false),
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.paths_resolved.source_dir, "sources");
        assert_eq!(config.paths_resolved.output_dir, "public");
        assert!(!config.site.continue_on_error);
    }
}
