use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QuillpressError, Result};

const CONFIG_FILE: &str = "quillpress.toml";

const DEFAULT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# quillpress configuration file
# Location: <site root>/quillpress.toml

[content]
# Subdirectory of the site root holding post files
# Default: "content"
dir = "content"

# File extensions scanned for posts
# Default: ["md", "markdown"]
extensions = ["md", "markdown"]

# Glob patterns (relative to the content dir) excluded from the scan
# Example: exclude = ["archive/**", "*.draft.md"]
exclude = []

# Also publish posts marked `draft = true`
# Default: false
include_drafts = false
"#;

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
}

/// Content scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Subdirectory of the site root holding post files
    #[serde(default = "default_dir")]
    pub dir: String,

    /// File extensions scanned for posts
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from the scan
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Also publish posts marked `draft = true`
    #[serde(default)]
    pub include_drafts: bool,
}

fn default_dir() -> String {
    "content".to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            extensions: default_extensions(),
            exclude: Vec::new(),
            include_drafts: false,
        }
    }
}

impl Config {
    /// Load config from the site directory
    pub fn load(site_dir: &Path) -> Result<Self> {
        let path = site_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| QuillpressError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to the site directory
    pub fn save(&self, site_dir: &Path) -> Result<()> {
        let path = site_dir.join(CONFIG_FILE);
        fs::create_dir_all(site_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(site_dir: &Path) -> PathBuf {
        site_dir.join(CONFIG_FILE)
    }

    /// Initialize config with the default template (rich comments)
    pub fn init(site_dir: &Path) -> Result<PathBuf> {
        let path = site_dir.join(CONFIG_FILE);
        fs::create_dir_all(site_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Resolve the content directory against the site root
    pub fn content_dir(&self, site_dir: &Path) -> PathBuf {
        site_dir.join(&self.content.dir)
    }
}
