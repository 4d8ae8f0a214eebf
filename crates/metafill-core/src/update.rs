//! In-place description updates
//!
//! Orchestrates the codec and the synthesizer: decides whether a post needs
//! a description, and if so substitutes a freshly serialized front matter
//! block into the raw text, leaving the body untouched.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::frontmatter::{self, Value};
use crate::post::Post;
use crate::summary;

/// Result of attempting to add a description to a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Whether the text was rewritten
    pub updated: bool,
    /// Whether a non-empty description was already present
    pub has_description: bool,
    /// The existing or newly synthesized description
    pub description: String,
}

/// Compute the description update for raw post text.
///
/// Returns the rewritten text (`None` when no update is needed) along with
/// the outcome. Applying this to its own output is a no-op, because the
/// description is then present.
pub fn update_text(text: &str) -> (Option<String>, UpdateOutcome) {
    let post = Post::parse(text);

    if let Some(existing) = post.description() {
        if !existing.is_empty() {
            return (
                None,
                UpdateOutcome {
                    updated: false,
                    has_description: true,
                    description: existing.to_text(),
                },
            );
        }
    }

    let description = summary::synthesize(post.body());

    let mut front = post.front().clone();
    front.set("description", Value::scalar(description.clone()));
    let new_block = frontmatter::serialize(&front);

    // Substitute only the original block; a post without one gets the new
    // block prepended
    let new_raw = match post.block() {
        Some(block) => post.raw().replacen(block, &new_block, 1),
        None => format!("{}{}", new_block, post.raw()),
    };

    (
        Some(new_raw),
        UpdateOutcome {
            updated: true,
            has_description: false,
            description,
        },
    )
}

/// Update a single post file on disk.
///
/// The file is rewritten only when an update is needed; with `dry_run` the
/// file is never touched but the outcome is reported as if it were.
pub fn update_file(path: &Path, dry_run: bool) -> Result<UpdateOutcome> {
    let text = fs::read_to_string(path)?;
    let (new_text, outcome) = update_text(&text);

    if let Some(new_text) = new_text {
        if dry_run {
            debug!(path = ?path, "dry_run_skip_write");
        } else {
            fs::write(path, new_text)?;
        }
    }

    Ok(outcome)
}
