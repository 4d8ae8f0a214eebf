//! Post document model
//!
//! A post is raw UTF-8 text split into an optional front matter block and a
//! free-form markdown body. The split is lossless: block (when present)
//! followed by body reconstructs the raw text byte for byte.

use crate::frontmatter::{self, FrontMatter, Value};

/// A parsed blog post
///
/// Built fresh per file, transformed in memory, and discarded afterwards;
/// no `Post` persists across files.
#[derive(Debug, Clone)]
pub struct Post {
    raw: String,
    block: Option<String>,
    front: FrontMatter,
    body: String,
}

impl Post {
    /// Parse raw post text into front matter and body.
    ///
    /// Text that does not begin with a delimited front matter block has no
    /// block and the whole text as body.
    pub fn parse(text: &str) -> Post {
        match frontmatter::split_block(text) {
            Some((block, body)) => Post {
                raw: text.to_string(),
                block: Some(block.to_string()),
                front: frontmatter::parse_block(block),
                body: body.to_string(),
            },
            None => Post {
                raw: text.to_string(),
                block: None,
                front: FrontMatter::new(),
                body: text.to_string(),
            },
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn block(&self) -> Option<&str> {
        self.block.as_deref()
    }

    pub fn front(&self) -> &FrontMatter {
        &self.front
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// The existing description value, if any
    pub fn description(&self) -> Option<&Value> {
        self.front.get("description")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_front_matter() {
        let text = "---\ntitle: \"Hello\"\ntags: ['a', 'b']\n---\n\nFirst paragraph.\n";
        let post = Post::parse(text);

        assert_eq!(post.block(), Some("---\ntitle: \"Hello\"\ntags: ['a', 'b']\n---\n"));
        assert_eq!(post.body(), "\nFirst paragraph.\n");
        assert_eq!(post.front().get("title"), Some(&Value::scalar("Hello")));
    }

    #[test]
    fn test_parse_without_front_matter() {
        let text = "Just a body.\n\nSecond paragraph.\n";
        let post = Post::parse(text);

        assert!(post.block().is_none());
        assert!(post.front().is_empty());
        assert_eq!(post.body(), text);
    }

    #[test]
    fn test_block_plus_body_reconstructs_raw() {
        let text = "---\ntitle: X\n---\nbody\n";
        let post = Post::parse(text);
        let rebuilt = format!("{}{}", post.block().unwrap_or(""), post.body());
        assert_eq!(rebuilt, post.raw());
    }

    #[test]
    fn test_description_accessor() {
        let post = Post::parse("---\ndescription: \"Existing.\"\n---\nbody\n");
        assert_eq!(post.description(), Some(&Value::scalar("Existing.")));

        let post = Post::parse("---\ntitle: X\n---\nbody\n");
        assert!(post.description().is_none());
    }
}
