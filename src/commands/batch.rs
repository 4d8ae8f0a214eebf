//! Batch mode: process every candidate post in the posts directory
//!
//! Failures are isolated per post: a post that cannot be read or written is
//! counted and logged, and iteration continues. Nothing is retried.

use serde::Serialize;
use tracing::warn;

use crate::cli::{Cli, OutputFormat};
use metafill_core::error::Result;
use metafill_core::store::PostStore;
use metafill_core::update;

/// Aggregate counts for a batch run
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub with_description: usize,
    pub added: usize,
    pub failed: usize,
}

/// Per-post result for machine-readable output
#[derive(Debug, Serialize)]
struct PostReport {
    post: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute batch mode
pub fn execute(cli: &Cli, store: &PostStore) -> Result<()> {
    let posts = store.posts()?;
    let human = cli.format == OutputFormat::Human && !cli.quiet;

    if human {
        println!("Processing all posts in {}", store.posts_dir().display());
    }

    let mut summary = BatchSummary {
        total: posts.len(),
        ..Default::default()
    };
    let mut reports = Vec::new();

    for path in &posts {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match update::update_file(path, cli.dry_run) {
            Ok(outcome) if outcome.has_description => {
                summary.with_description += 1;
                if human {
                    println!("✓ {} already has a description", name);
                }
                reports.push(PostReport {
                    post: name,
                    status: "has-description",
                    description: Some(outcome.description),
                    error: None,
                });
            }
            Ok(outcome) if outcome.description.is_empty() => {
                // Updated, but with an empty description: counted as failed
                summary.failed += 1;
                if human {
                    println!("✗ {}: Could not synthesize a description", name);
                }
                reports.push(PostReport {
                    post: name,
                    status: "empty-description",
                    description: None,
                    error: None,
                });
            }
            Ok(outcome) => {
                summary.added += 1;
                if human {
                    println!("+ {}: Added description: \"{}\"", name, outcome.description);
                }
                reports.push(PostReport {
                    post: name,
                    status: "added",
                    description: Some(outcome.description),
                    error: None,
                });
            }
            Err(e) => {
                summary.failed += 1;
                warn!(post = %name, error = %e, "post_update_failed");
                if human {
                    println!("✗ {}: {}", name, e);
                }
                reports.push(PostReport {
                    post: name,
                    status: "error",
                    description: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    render(cli, &summary, &reports)
}

fn render(cli: &Cli, summary: &BatchSummary, reports: &[PostReport]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "posts": reports,
                "summary": summary,
                "dry_run": cli.dry_run,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!();
                println!("Summary:");
                println!("Total posts: {}", summary.total);
                println!("Posts with descriptions: {}", summary.with_description);
                println!("Descriptions added: {}", summary.added);
                println!("Failed: {}", summary.failed);
            }
        }
    }

    Ok(())
}
