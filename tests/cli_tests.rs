//! Integration tests for the metafill CLI
//!
//! These tests run the metafill binary against temporary site directories
//! and verify per-post behavior, batch aggregation, and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Get a Command for metafill
fn metafill() -> Command {
    cargo_bin_cmd!("metafill")
}

/// Create a site root with a `_posts` directory holding the given files
fn site(posts: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    let posts_dir = dir.path().join("_posts");
    fs::create_dir_all(&posts_dir).unwrap();
    for (name, content) in posts {
        fs::write(posts_dir.join(name), content).unwrap();
    }
    dir
}

fn read_post(root: &Path, name: &str) -> String {
    fs::read_to_string(root.join("_posts").join(name)).unwrap()
}

const NEEDS_DESCRIPTION: &str =
    "---\ntitle: \"Hello World\"\nlayout: post\ntags: ['intro', 'news']\n---\n\nA first post about **things** worth reading.\n\nMore text.\n";

const HAS_DESCRIPTION: &str =
    "---\ntitle: \"Old Post\"\ndescription: \"Already summarized.\"\n---\n\nBody text.\n";

const EMPTY_BODY: &str = "---\ntitle: \"Empty\"\n---\n";

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    metafill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: metafill"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_version_flag() {
    metafill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("metafill"));
}

// ============================================================================
// Single-post mode
// ============================================================================

#[test]
fn test_single_post_adds_description() {
    let dir = site(&[("2024-01-01-hello.md", NEEDS_DESCRIPTION)]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("2024-01-01-hello.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully added description"));

    let updated = read_post(dir.path(), "2024-01-01-hello.md");
    assert!(updated.contains("description: \"A first post about things worth reading.\"\n"));
    // Body untouched
    assert!(updated.ends_with("\nA first post about **things** worth reading.\n\nMore text.\n"));
}

#[test]
fn test_single_post_already_described() {
    let dir = site(&[("old.md", HAS_DESCRIPTION)]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("old.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("already has a meta description"));

    // Byte-for-byte unchanged
    assert_eq!(read_post(dir.path(), "old.md"), HAS_DESCRIPTION);
}

#[test]
fn test_single_post_not_found() {
    let dir = site(&[]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("missing.md")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("post not found: missing.md"));
}

#[test]
fn test_single_post_not_found_json_envelope() {
    let dir = site(&[]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .arg("missing.md")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\": \"post_not_found\""));
}

#[test]
fn test_single_post_json_output() {
    let dir = site(&[("hello.md", NEEDS_DESCRIPTION)]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .arg("hello.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"updated\": true"))
        .stdout(predicate::str::contains(
            "\"description\": \"A first post about things worth reading.\"",
        ));
}

#[test]
fn test_single_post_idempotent() {
    let dir = site(&[("hello.md", NEEDS_DESCRIPTION)]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("hello.md")
        .assert()
        .success();
    let after_first = read_post(dir.path(), "hello.md");

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("hello.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("already has a meta description"));
    assert_eq!(read_post(dir.path(), "hello.md"), after_first);
}

#[test]
fn test_single_post_dry_run() {
    let dir = site(&[("hello.md", NEEDS_DESCRIPTION)]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("--dry-run")
        .arg("hello.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully added description"));

    assert_eq!(read_post(dir.path(), "hello.md"), NEEDS_DESCRIPTION);
}

// ============================================================================
// Batch mode
// ============================================================================

#[test]
fn test_batch_aggregation() {
    let dir = site(&[
        ("a-described.md", HAS_DESCRIPTION),
        ("b-usable.md", NEEDS_DESCRIPTION),
        ("c-empty.md", EMPTY_BODY),
    ]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ a-described.md already has a description"))
        .stdout(predicate::str::contains("+ b-usable.md: Added description"))
        .stdout(predicate::str::contains(
            "✗ c-empty.md: Could not synthesize a description",
        ))
        .stdout(predicate::str::contains("Total posts: 3"))
        .stdout(predicate::str::contains("Posts with descriptions: 1"))
        .stdout(predicate::str::contains("Descriptions added: 1"))
        .stdout(predicate::str::contains("Failed: 1"));
}

#[test]
fn test_batch_empty_body_still_updates() {
    let dir = site(&[("c-empty.md", EMPTY_BODY)]);

    metafill().arg("--root").arg(dir.path()).assert().success();

    let updated = read_post(dir.path(), "c-empty.md");
    assert!(updated.contains("description: \"\"\n"));

    // An empty description does not satisfy a rerun, but the rewrite is
    // byte-identical so the file never drifts
    metafill()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed: 1"));
    assert_eq!(read_post(dir.path(), "c-empty.md"), updated);
}

#[test]
fn test_batch_skips_excluded_and_foreign_files() {
    let dir = site(&[
        ("_draft.md", NEEDS_DESCRIPTION),
        ("notes.txt", NEEDS_DESCRIPTION),
        ("real.md", NEEDS_DESCRIPTION),
    ]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total posts: 1"));

    assert_eq!(read_post(dir.path(), "_draft.md"), NEEDS_DESCRIPTION);
    assert_eq!(read_post(dir.path(), "notes.txt"), NEEDS_DESCRIPTION);
}

#[test]
fn test_batch_json_output() {
    let dir = site(&[
        ("a-described.md", HAS_DESCRIPTION),
        ("b-usable.md", NEEDS_DESCRIPTION),
    ]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 2"))
        .stdout(predicate::str::contains("\"status\": \"has-description\""))
        .stdout(predicate::str::contains("\"status\": \"added\""));
}

#[test]
fn test_batch_missing_posts_dir() {
    let dir = tempdir().unwrap();

    metafill()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("posts directory not found"));
}

#[test]
fn test_batch_quiet_suppresses_output() {
    let dir = site(&[("b-usable.md", NEEDS_DESCRIPTION)]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // The update still happens
    assert!(read_post(dir.path(), "b-usable.md").contains("description:"));
}

#[test]
fn test_batch_dry_run_leaves_files_alone() {
    let dir = site(&[("b-usable.md", NEEDS_DESCRIPTION)]);

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Descriptions added: 1"));

    assert_eq!(read_post(dir.path(), "b-usable.md"), NEEDS_DESCRIPTION);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_posts_dir_flag_overrides_default() {
    let dir = tempdir().unwrap();
    let posts_dir = dir.path().join("content");
    fs::create_dir_all(&posts_dir).unwrap();
    fs::write(posts_dir.join("a.md"), NEEDS_DESCRIPTION).unwrap();

    metafill()
        .arg("--root")
        .arg(dir.path())
        .arg("--posts-dir")
        .arg("content")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total posts: 1"));
}

#[test]
fn test_config_file_sets_posts_dir() {
    let dir = tempdir().unwrap();
    let posts_dir = dir.path().join("content");
    fs::create_dir_all(&posts_dir).unwrap();
    fs::write(posts_dir.join("a.md"), NEEDS_DESCRIPTION).unwrap();
    fs::write(dir.path().join("metafill.toml"), "posts_dir = \"content\"\n").unwrap();

    metafill()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total posts: 1"));
}

// ============================================================================
// Description content
// ============================================================================

#[test]
fn test_description_skips_heading_and_code_fence() {
    let body = "# Heading\n\n```sh\nmetafill\n```\n\nProse paragraph wins.\n";
    let content = format!("---\ntitle: \"T\"\n---\n\n{}", body);
    let dir = site(&[("post.md", &content)]);

    metafill().arg("--root").arg(dir.path()).assert().success();

    let updated = read_post(dir.path(), "post.md");
    assert!(updated.contains("description: \"Prose paragraph wins.\"\n"));
}

#[test]
fn test_description_truncated_to_160_characters() {
    let long = "x".repeat(200);
    let content = format!("---\ntitle: \"T\"\n---\n\n{}\n", long);
    let dir = site(&[("post.md", &content)]);

    metafill().arg("--root").arg(dir.path()).assert().success();

    let updated = read_post(dir.path(), "post.md");
    let line = updated
        .lines()
        .find(|l| l.starts_with("description:"))
        .unwrap();
    let value = line
        .trim_start_matches("description: ")
        .trim_matches('"');
    assert_eq!(value.chars().count(), 160);
    assert!(value.ends_with("..."));
}
