//! Command dispatch logic for metafill

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use crate::commands;
use metafill_core::config::SiteConfig;
use metafill_core::error::Result;
use metafill_core::store::PostStore;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Determine the site root directory
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    // Optional metafill.toml at the root; CLI flags override it
    let mut config = SiteConfig::load_or_default(&root)?;
    if let Some(posts_dir) = &cli.posts_dir {
        config.posts_dir = posts_dir.clone();
    }

    let store = PostStore::open(&root, config);

    tracing::debug!(elapsed = ?start.elapsed(), posts_dir = ?store.posts_dir(), "resolve_store");

    match &cli.post {
        Some(name) => commands::single::execute(cli, &store, name),
        None => commands::batch::execute(cli, &store),
    }
}
