//! Minimal front matter codec
//!
//! Parses the leading `---` delimited block of a post into an ordered
//! key/value mapping and serializes it back. This is deliberately not a YAML
//! parser: it only round-trips the flat scalar and bracket-list shapes the
//! tool itself emits. Nested maps, multi-line scalars and comments are
//! unsupported.

/// Keys emitted first when serializing, in this order
const PREFERRED_KEYS: [&str; 5] = ["title", "layout", "categories", "tags", "description"];

/// A front matter value: a plain scalar or a flat list of strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Value {
    pub fn scalar(s: impl Into<String>) -> Self {
        Value::Scalar(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    /// True for an empty scalar or an empty list
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Scalar(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
        }
    }

    /// Flatten to plain text: scalars as-is, lists comma-joined
    pub fn to_text(&self) -> String {
        match self {
            Value::Scalar(s) => s.clone(),
            Value::List(items) => items.join(","),
        }
    }
}

/// Ordered key/value front matter mapping
///
/// Keys are unique; insertion order is preserved because serialization order
/// of unrecognized keys depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: Vec<(String, Value)>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a key, replacing the value in place if the key already exists
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Split text into a front matter block and the remaining body.
///
/// The block is the span from the opening `---` line through the closing
/// `---` line's newline, inclusive, so that `block + body` reconstructs the
/// input byte for byte. Returns `None` when the text does not begin with a
/// delimiter line or the closing delimiter is missing.
pub fn split_block(text: &str) -> Option<(&str, &str)> {
    let first_nl = text.find('\n')?;
    if !is_delimiter(&text[..first_nl]) {
        return None;
    }

    let mut pos = first_nl + 1;
    while pos < text.len() {
        let line_end = pos + text[pos..].find('\n')?;
        if is_delimiter(&text[pos..line_end]) {
            let block_end = line_end + 1;
            return Some((&text[..block_end], &text[block_end..]));
        }
        pos = line_end + 1;
    }
    None
}

/// A delimiter line is `---` with nothing but trailing whitespace
fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Parse the key/value lines of a front matter block.
///
/// Each line splits at the first colon; lines without a colon are ignored.
/// Duplicate keys keep their first position and take the last value.
pub fn parse_block(block: &str) -> FrontMatter {
    let mut front = FrontMatter::new();

    for line in block.lines() {
        if is_delimiter(line) {
            continue;
        }
        let Some(colon) = line.find(':') else {
            continue;
        };
        let key = line[..colon].trim();
        if key.is_empty() {
            continue;
        }
        front.set(key, parse_value(&line[colon + 1..]));
    }

    front
}

/// Interpret a raw value, in order of precedence: bracket list, quoted
/// scalar, raw scalar.
fn parse_value(raw: &str) -> Value {
    let raw = raw.trim();

    if raw.starts_with('[') && raw.ends_with(']') && raw.len() >= 2 {
        let inner = &raw[1..raw.len() - 1];
        // Naive comma split: nested commas inside quoted elements are not
        // specially handled
        let items = inner
            .split(',')
            .map(|item| item.replace(['\'', '"'], "").trim().to_string())
            .collect();
        return Value::List(items);
    }

    if raw.starts_with('"') && raw.ends_with('"') && raw.len() >= 2 {
        return Value::Scalar(raw[1..raw.len() - 1].to_string());
    }

    Value::Scalar(raw.to_string())
}

/// Serialize front matter back into a literal block, including both
/// delimiter lines.
///
/// Preferred keys come first in a fixed order, then remaining keys in their
/// original encounter order. The emitted block re-parses to the same mapping
/// for any front matter this tool itself produces.
pub fn serialize(front: &FrontMatter) -> String {
    let mut out = String::from("---\n");

    for key in PREFERRED_KEYS {
        if let Some(value) = front.get(key) {
            emit_preferred(&mut out, key, value);
        }
    }

    for (key, value) in front.iter() {
        if PREFERRED_KEYS.contains(&key) {
            continue;
        }
        match value {
            Value::Scalar(s) => {
                out.push_str(&format!("{}: {}\n", key, s));
            }
            Value::List(items) => {
                out.push_str(&format!("{}: [{}]\n", key, items.join(", ")));
            }
        }
    }

    out.push_str("---\n");
    out
}

fn emit_preferred(out: &mut String, key: &str, value: &Value) {
    match key {
        // title and description are always quoted scalars
        "title" | "description" => {
            out.push_str(&format!("{}: \"{}\"\n", key, value.to_text()));
        }
        // categories and tags render as single-quoted bracket lists
        "categories" | "tags" => match value {
            Value::List(items) => {
                let quoted: Vec<String> = items.iter().map(|i| format!("'{}'", i)).collect();
                out.push_str(&format!("{}: [{}]\n", key, quoted.join(", ")));
            }
            Value::Scalar(s) => {
                out.push_str(&format!("{}: {}\n", key, s));
            }
        },
        _ => {
            out.push_str(&format!("{}: {}\n", key, value.to_text()));
        }
    }
}
