//! Message parsing: raw line bytes to an owned [`Message`].

use std::str::FromStr;

use crate::error::CodecError;
use crate::prefix::Prefix;
use crate::tags::parse_tags;

use super::tokenizer::RawLine;
use super::types::Message;

impl Message {
    /// Parse one complete line into a [`Message`].
    ///
    /// The caller supplies the line with the CRLF (or LF) delimiter
    /// already stripped; a trailing CR/LF is tolerated and ignored.
    /// Invalid UTF-8 in the payload is repaired with U+FFFD rather than
    /// failing the message; real traffic is not always compliant.
    ///
    /// Commands are case-insensitive on the wire and stored upper-case.
    ///
    /// # Errors
    ///
    /// [`CodecError::Tokenize`] if the line has no command token, and
    /// [`CodecError::Tags`] if the tag block carries a truncated escape.
    ///
    /// # Example
    ///
    /// ```
    /// use ircwire::Message;
    ///
    /// let msg = Message::parse(b"@id=234;rose :dan!d@localhost privmsg #chan :Hey!").unwrap();
    /// assert_eq!(msg.command, "PRIVMSG");
    /// assert_eq!(msg.tag_value("id"), Some("234"));
    /// assert!(msg.has_flag("rose"));
    /// assert_eq!(msg.params, vec!["#chan", "Hey!"]);
    /// ```
    #[must_use = "parsing result should be handled"]
    pub fn parse(line: &[u8]) -> Result<Message, CodecError> {
        let decoded = String::from_utf8_lossy(line);
        let trimmed = decoded.trim_end_matches(['\r', '\n']);

        let raw = RawLine::tokenize(trimmed)?;

        let tags = raw.tags.map(parse_tags).transpose()?;
        let prefix = raw.prefix.map(Prefix::parse);

        let mut params: Vec<String> = raw.middles.iter().map(|p| (*p).to_owned()).collect();
        if let Some(trailing) = raw.trailing {
            params.push(trailing.to_owned());
        }

        Ok(Message {
            tags,
            prefix,
            command: raw.command.to_ascii_uppercase(),
            params,
        })
    }
}

impl FromStr for Message {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        Message::parse(s.as_bytes())
    }
}
