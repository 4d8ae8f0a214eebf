//! Site configuration for metafill
//!
//! Configuration is an explicit value handed to the post store, optionally
//! loaded from a `metafill.toml` at the site root. Defaults cover the common
//! Jekyll layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MetafillError, Result};

/// Name of the optional configuration file at the site root
pub const CONFIG_FILE: &str = "metafill.toml";

/// Site layout and file filtering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the posts, relative to the site root
    pub posts_dir: PathBuf,
    /// File extensions considered posts
    pub extensions: Vec<String>,
    /// Files whose name starts with this prefix are skipped
    pub exclude_prefix: char,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            posts_dir: PathBuf::from("_posts"),
            extensions: vec!["md".to_string(), "markdown".to_string()],
            exclude_prefix: '_',
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `metafill.toml` from the site root if present, defaults otherwise
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MetafillError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Whether a file name is a candidate post
    pub fn is_candidate(&self, file_name: &str) -> bool {
        if file_name.starts_with(self.exclude_prefix) {
            return false;
        }
        let ext = Path::new(file_name).extension().and_then(|e| e.to_str());
        ext.is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }
}
