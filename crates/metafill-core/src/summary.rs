//! Summary synthesis from post bodies
//!
//! Picks the first eligible prose paragraph, strips markdown formatting via
//! an ordered pipeline of independent text transforms, and enforces the
//! meta-description length limit.

use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

/// Descriptions longer than this are cut to this many characters plus an
/// ellipsis. The boundary is 157 so the truncated result is exactly 160.
const TRUNCATE_AT: usize = 157;

/// Cleanup transforms, applied in this exact order
const CLEANUPS: [fn(&str) -> String; 4] = [strip_links, strip_bold, strip_italic, strip_inline_code];

/// Derive a short description from a markdown body.
///
/// Returns an empty string when no eligible paragraph exists.
pub fn synthesize(body: &str) -> String {
    let Some(paragraph) = first_eligible_paragraph(body) else {
        return String::new();
    };

    let mut text = paragraph;
    for cleanup in CLEANUPS {
        text = cleanup(&text);
    }

    truncate(text.trim())
}

/// First paragraph that is non-empty and not a heading or fenced-code line
fn first_eligible_paragraph(body: &str) -> Option<String> {
    let mut current: Vec<&str> = Vec::new();

    // Trailing sentinel flushes the final paragraph
    for line in body.lines().chain(std::iter::once("")) {
        if line.trim().is_empty() {
            if let Some(paragraph) = eligible(&current) {
                return Some(paragraph);
            }
            current.clear();
        } else {
            current.push(line);
        }
    }

    None
}

fn eligible(lines: &[&str]) -> Option<String> {
    let text = lines.join("\n");
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("```") {
        return None;
    }
    Some(trimmed.to_string())
}

/// Replace `[text](url)` link markup with just the text
pub fn strip_links(text: &str) -> String {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    replace_all(&RE, r"\[([^\]]+)\]\([^)]+\)", text)
}

/// Remove `**bold**` markers
pub fn strip_bold(text: &str) -> String {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    replace_all(&RE, r"\*\*([^*]+)\*\*", text)
}

/// Remove `*italic*` markers
pub fn strip_italic(text: &str) -> String {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    replace_all(&RE, r"\*([^*]+)\*", text)
}

/// Remove `` `inline code` `` markers
pub fn strip_inline_code(text: &str) -> String {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    replace_all(&RE, r"`([^`]+)`", text)
}

/// Replace every match of `pattern` with its first capture group, compiling
/// the pattern once. A pattern that fails to compile leaves the text
/// unchanged.
fn replace_all(cell: &'static OnceLock<Option<Regex>>, pattern: &str, text: &str) -> String {
    let re = cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, pattern, "failed to compile cleanup regex");
            None
        }
    });

    match re {
        Some(re) => re.replace_all(text, "$1").into_owned(),
        None => text.to_string(),
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > TRUNCATE_AT {
        let mut out: String = text.chars().take(TRUNCATE_AT).collect();
        out.push_str("...");
        out
    } else {
        text.to_string()
    }
}
