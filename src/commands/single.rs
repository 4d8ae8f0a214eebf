//! Single-post mode: process one named post
//!
//! Unlike batch mode, an I/O failure here is fatal and aborts with a
//! non-zero exit code.

use crate::cli::{Cli, OutputFormat};
use metafill_core::error::Result;
use metafill_core::store::PostStore;
use metafill_core::update;

/// Execute single-post mode
pub fn execute(cli: &Cli, store: &PostStore, name: &str) -> Result<()> {
    let path = store.resolve(name)?;

    if cli.format == OutputFormat::Human && !cli.quiet {
        println!("Processing post: {}", name);
    }

    let outcome = update::update_file(&path, cli.dry_run)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "post": name,
                "updated": outcome.updated,
                "has_description": outcome.has_description,
                "description": outcome.description,
                "dry_run": cli.dry_run,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if outcome.has_description {
                println!("This post already has a meta description.");
            } else if outcome.description.is_empty() {
                println!("Could not synthesize a description for this post.");
            } else {
                println!("Successfully added description: \"{}\"", outcome.description);
            }
        }
    }

    Ok(())
}
