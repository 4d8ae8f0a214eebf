//! CLI argument parsing for metafill
//!
//! Uses clap for argument parsing. A single positional argument selects one
//! post; with no positional the whole posts directory is processed.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub use crate::format::OutputFormat;

/// Metafill - fill in missing meta descriptions for front-matter blog posts
#[derive(Parser, Debug)]
#[command(name = "metafill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Post to process (file name inside the posts directory); all posts
    /// when omitted
    pub post: Option<String>,

    /// Site root directory containing the posts directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Explicit posts directory (relative to the site root)
    #[arg(long)]
    pub posts_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Report what would change without writing any file
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "METAFILL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

// Implement ValueEnum for OutputFormat to work with clap
impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[OutputFormat::Human, OutputFormat::Json]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            OutputFormat::Human => Some(clap::builder::PossibleValue::new("human")),
            OutputFormat::Json => Some(clap::builder::PossibleValue::new("json")),
        }
    }
}
