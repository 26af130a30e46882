//! The owned IRC message type.

use crate::prefix::Prefix;
use crate::tags::{TagMap, TagValue};

/// An owned IRC message.
///
/// The complete structured form of one wire line: optional IRCv3 tags,
/// optional prefix/origin, the command, and its parameters in order.
///
/// Constructed either by [`Message::parse`] (immutable once returned) or
/// field-by-field via [`Message::new`] and the builder methods before
/// calling [`Message::to_wire`](Message::to_wire). The codec never
/// mutates a message it is given.
///
/// Invariant: among `params`, only the last may be empty, contain spaces,
/// or start with `:`. `to_wire` enforces this; `parse` cannot produce a
/// message that violates it.
///
/// # Example
///
/// ```
/// use ircwire::Message;
///
/// let msg = Message::parse(b":dan!d@localhost PRIVMSG #chan :Hey!").unwrap();
/// assert_eq!(msg.command, "PRIVMSG");
/// assert_eq!(msg.params, vec!["#chan", "Hey!"]);
///
/// let wire = msg.to_wire().unwrap();
/// assert_eq!(wire, b":dan!d@localhost PRIVMSG #chan Hey!\r\n");
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// IRCv3 message tags (e.g., `time`, `msgid`).
    pub tags: Option<TagMap>,
    /// Message prefix/origin (e.g., `nick!user@host`).
    pub prefix: Option<Prefix>,
    /// The command, upper-case when produced by `parse`.
    pub command: String,
    /// Ordered parameters; the trailing parameter, if any, is last.
    pub params: Vec<String>,
}

impl Message {
    /// Create a message with no tags and no prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use ircwire::Message;
    ///
    /// let msg = Message::new("PRIVMSG", ["#chan", "hello there"]);
    /// assert_eq!(msg.to_wire().unwrap(), b"PRIVMSG #chan :hello there\r\n");
    /// ```
    pub fn new<C, P, I>(command: C, params: I) -> Self
    where
        C: Into<String>,
        P: Into<String>,
        I: IntoIterator<Item = P>,
    {
        Message {
            tags: None,
            prefix: None,
            command: command.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a valued IRCv3 tag to this message.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(TagMap::new)
            .insert(key.into(), TagValue::Value(value.into()));
        self
    }

    /// Add a boolean-flag IRCv3 tag to this message.
    #[must_use]
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(TagMap::new)
            .insert(key.into(), TagValue::Flag);
        self
    }

    /// Set the prefix/origin of this message.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Get the value of an IRCv3 tag by key.
    ///
    /// Returns `None` for absent keys and for boolean-flag tags.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.get(key)?.as_str()
    }

    /// Whether a tag key is present as a boolean flag.
    pub fn has_flag(&self, key: &str) -> bool {
        matches!(self.tags.as_ref().and_then(|t| t.get(key)), Some(TagValue::Flag))
    }

    /// Get the nickname from the message prefix, if present.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::nick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_constructor() {
        let msg = Message::new("PING", ["irc.example.com"]);
        assert_eq!(msg.command, "PING");
        assert_eq!(msg.params, vec!["irc.example.com"]);
        assert!(msg.tags.is_none());
        assert!(msg.prefix.is_none());
    }

    #[test]
    fn test_new_no_params() {
        let msg = Message::new("QUIT", Vec::<String>::new());
        assert!(msg.params.is_empty());
    }

    #[test]
    fn test_with_tag_and_flag() {
        let msg = Message::new("PRIVMSG", ["#test", "Hello"])
            .with_tag("time", "2023-01-01T00:00:00Z")
            .with_tag("msgid", "abc123")
            .with_flag("bot");

        assert_eq!(msg.tag_value("time"), Some("2023-01-01T00:00:00Z"));
        assert_eq!(msg.tag_value("msgid"), Some("abc123"));
        assert!(msg.has_flag("bot"));
        assert_eq!(msg.tag_value("bot"), None);
        assert!(!msg.has_flag("time"));
    }

    #[test]
    fn test_with_tag_overwrites() {
        let msg = Message::new("PING", ["x"])
            .with_tag("k", "old")
            .with_tag("k", "new");
        assert_eq!(msg.tag_value("k"), Some("new"));
        assert_eq!(msg.tags.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_with_prefix_and_source_nickname() {
        let msg = Message::new("PRIVMSG", ["#test", "Hello"])
            .with_prefix(Prefix::new_user("bot", "bot", "example.com"));
        assert_eq!(msg.source_nickname(), Some("bot"));

        let msg = Message::new("001", ["nick"]).with_prefix(Prefix::new_server("irc.example.com"));
        assert_eq!(msg.source_nickname(), None);
    }
}
