//! Mini YAML reader: one document body into a mapping.
//!
//! Handles only what the log producer emits: flow scalars, `|`/`|-` block
//! scalars, unindented section headers with indented entries beneath, and
//! `- ` list items. The reader is an explicit state machine:
//!
//! - `Root`: entries land in the document root.
//! - `InSection`: entries land in the mapping of the last unindented
//!   header (`event:`).
//! - `InBlockScalar`: lines accumulate verbatim until an unindented line
//!   containing `:` (or end of document) closes the scalar. The closing line
//!   is then read as an ordinary entry.
//!
//! Reading is total. Lines that cannot be read are skipped and whatever was
//! built is returned.

use std::mem;

use crate::model::{Mapping, Value};

/// Key under which list items are collected.
const LIST_KEY: &str = "data";

/// Parse one document body.
pub fn read_document(body: &str) -> Mapping {
    let mut reader = Reader::default();
    for line in body.lines() {
        reader.feed(line);
    }
    reader.finish()
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Root,
    InSection,
    InBlockScalar(BlockScalar),
}

#[derive(Debug)]
struct BlockScalar {
    key: String,
    lines: Vec<String>,
    /// Structural indentation, fixed by the first non-blank line.
    indent: Option<usize>,
}

impl BlockScalar {
    fn new(key: String) -> Self {
        Self {
            key,
            lines: Vec::new(),
            indent: None,
        }
    }

    fn push(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.lines.push(String::new());
            return;
        }
        let width = indent_width(line);
        let indent = *self.indent.get_or_insert(width);
        self.lines.push(line[width.min(indent)..].to_string());
    }

    fn text(&self) -> String {
        self.lines.join("\n").trim_end().to_string()
    }
}

#[derive(Debug, Default)]
struct Reader {
    root: Mapping,
    /// Key and entries of the open section, bound into the root on close.
    section: Option<(String, Mapping)>,
    state: State,
}

impl Reader {
    fn feed(&mut self, line: &str) {
        let line = line.trim_end_matches('\r');
        if let State::InBlockScalar(block) = &mut self.state {
            if is_indented(line) || !line.contains(':') {
                block.push(line);
                return;
            }
            self.close_block();
        }
        self.read_line(line);
    }

    fn finish(mut self) -> Mapping {
        self.close_block();
        self.close_section();
        self.root
    }

    /// Bind a pending block scalar and return to the section it came from.
    fn close_block(&mut self) {
        let State::InBlockScalar(block) = mem::take(&mut self.state) else {
            return;
        };
        let text = block.text();
        self.entries_mut().insert(block.key, Value::String(text));
        self.state = if self.section.is_some() {
            State::InSection
        } else {
            State::Root
        };
    }

    fn close_section(&mut self) {
        if let Some((key, entries)) = self.section.take() {
            self.root.insert(key, Value::Map(entries));
        }
    }

    fn read_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }

        if let Some(item) = list_item(trimmed) {
            let value = match split_key_value(item) {
                Some((key, value)) if !key.is_empty() => {
                    Value::Map(Mapping::from([(key.to_string(), coerce(value))]))
                }
                _ => coerce(item),
            };
            self.push_item(value);
            return;
        }

        let Some((key, value)) = split_key_value(trimmed) else {
            tracing::trace!(line, "skipping unreadable line");
            return;
        };
        if key.is_empty() {
            tracing::trace!(line, "skipping line with empty key");
            return;
        }
        let key = key.to_string();

        if !is_indented(line) {
            self.close_section();
            if value.is_empty() {
                self.section = Some((key, Mapping::new()));
                self.state = State::InSection;
                return;
            }
            self.state = State::Root;
        }

        if value == "|" || value == "|-" {
            self.state = State::InBlockScalar(BlockScalar::new(key));
            return;
        }

        self.entries_mut().insert(key, coerce(value));
    }

    fn push_item(&mut self, value: Value) {
        let entry = self
            .entries_mut()
            .entry(LIST_KEY.to_string())
            .or_insert_with(|| Value::List(Vec::new()));
        match entry {
            Value::List(items) => items.push(value),
            other => *other = Value::List(vec![value]),
        }
    }

    /// The mapping new entries land in: the open section, else the root.
    fn entries_mut(&mut self) -> &mut Mapping {
        match &mut self.section {
            Some((_, entries)) => entries,
            None => &mut self.root,
        }
    }
}

fn is_indented(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn list_item(trimmed: &str) -> Option<&str> {
    if trimmed == "-" {
        return Some("");
    }
    trimmed.strip_prefix("- ").map(str::trim)
}

/// Split an entry into key and value.
///
/// `": "` wins over a trailing `:` so namespaced keys such as
/// `lifecycle:transition` stay whole.
fn split_key_value(s: &str) -> Option<(&str, &str)> {
    if let Some(idx) = s.find(": ") {
        return Some((s[..idx].trim(), s[idx + 2..].trim()));
    }
    s.strip_suffix(':').map(|key| (key.trim(), ""))
}

/// Coerce a flow scalar into a typed value.
pub fn coerce(raw: &str) -> Value {
    match raw {
        "null" | "~" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Some(inner) = unquote(raw) {
        return Value::String(inner.to_string());
    }

    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Number(n),
        _ => Value::String(raw.to_string()),
    }
}

fn unquote(raw: &str) -> Option<&str> {
    if raw.len() < 2 {
        return None;
    }
    ['"', '\''].into_iter().find_map(|quote| {
        raw.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}
