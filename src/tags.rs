//! IRCv3 message-tag types and escaping utilities.
//!
//! Tag values travel escaped on the wire so that `;`, space, and line
//! delimiters never collide with the surrounding grammar. This module
//! handles the value escaping and the `key=value;key2` block as a whole.

use std::collections::BTreeMap;
use std::fmt::{Result as FmtResult, Write};

use crate::error::TagEscapeError;

/// The value side of an IRCv3 tag.
///
/// A key present with no `=` is a boolean flag; `key=` carries an explicit
/// empty string. The two serialize differently and are kept distinct so
/// round trips are exact.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagValue {
    /// Key present with no value (`@flag`).
    Flag,
    /// Key with an unescaped string value (`@key=value`); may be empty.
    Value(String),
}

impl TagValue {
    /// Get the string value, if this tag carries one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Flag => None,
            TagValue::Value(v) => Some(v),
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Value(s.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Value(s)
    }
}

/// The tag block of one message: key → value, keys unique.
///
/// On parse, the last occurrence of a duplicated key wins. Iteration order
/// is lexicographic, which makes serialization deterministic; tag order is
/// not semantically significant on the wire.
pub type TagMap = BTreeMap<String, TagValue>;

/// Escape a tag value for the wire.
///
/// Single left-to-right scan; each input character maps to at most a
/// two-character output sequence.
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match c {
            ';' => f.write_str("\\:")?,
            ' ' => f.write_str("\\s")?,
            '\\' => f.write_str("\\\\")?,
            '\r' => f.write_str("\\r")?,
            '\n' => f.write_str("\\n")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Unescape a tag value from wire format.
///
/// Reverses [`escape_tag_value`]. An unrecognized escaped character is
/// passed through literally (the backslash is dropped), matching the
/// tolerance the IRCv3 message-tags spec asks of parsers. A `\` with nothing following it is
/// [`TagEscapeError::Truncated`].
pub fn unescape_tag_value(value: &str) -> Result<String, TagEscapeError> {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => return Err(TagEscapeError::Truncated),
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    Ok(unescaped)
}

/// Parse a tag block (without the leading `@`) into a [`TagMap`].
///
/// Splits on `;`, then each item once on the first `=`. Empty items are
/// skipped. Duplicated keys: last occurrence wins.
pub fn parse_tags(tags_str: &str) -> Result<TagMap, TagEscapeError> {
    let mut map = TagMap::new();
    for item in tags_str.split(';').filter(|s| !s.is_empty()) {
        let mut iter = item.splitn(2, '=');
        let key = iter.next().unwrap_or("");
        let value = match iter.next() {
            Some(raw) => TagValue::Value(unescape_tag_value(raw)?),
            None => TagValue::Flag,
        };
        map.insert(key.to_owned(), value);
    }
    Ok(map)
}

/// Serialize a [`TagMap`] to wire form, without the leading `@`.
pub fn serialize_tags(tags: &TagMap) -> String {
    let mut out = String::new();
    for (i, (key, value)) in tags.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(key);
        if let TagValue::Value(v) = value {
            out.push('=');
            // Writing to a String never fails.
            let _ = escape_tag_value(&mut out, v);
        }
    }
    out
}
