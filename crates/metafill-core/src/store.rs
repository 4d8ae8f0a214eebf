//! Post directory access
//!
//! Enumerates candidate posts beneath a site root and resolves single post
//! names. Posts are processed independently; the store holds no state beyond
//! its location and configuration.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::SiteConfig;
use crate::error::{MetafillError, Result};

/// Handle on the configured posts directory
#[derive(Debug, Clone)]
pub struct PostStore {
    posts_dir: PathBuf,
    config: SiteConfig,
}

impl PostStore {
    /// Open the posts directory beneath `root` per the configuration
    pub fn open(root: &Path, config: SiteConfig) -> PostStore {
        PostStore {
            posts_dir: root.join(&config.posts_dir),
            config,
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// All candidate posts, sorted by file name for deterministic output
    pub fn posts(&self) -> Result<Vec<PathBuf>> {
        if !self.posts_dir.is_dir() {
            return Err(MetafillError::PostsDirNotFound {
                path: self.posts_dir.clone(),
            });
        }

        let mut posts: Vec<PathBuf> = WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|name| self.config.is_candidate(name))
            })
            .map(|e| e.into_path())
            .collect();

        posts.sort();
        Ok(posts)
    }

    /// Resolve a single post by file name
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let path = self.posts_dir.join(name);
        if !path.is_file() {
            return Err(MetafillError::PostNotFound {
                name: name.to_string(),
            });
        }
        Ok(path)
    }
}
