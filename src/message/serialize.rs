//! Message serialization: an owned [`Message`] back to wire bytes.

use std::fmt::{self, Display, Formatter};

use crate::error::CodecError;
use crate::tags::serialize_tags;

use super::types::Message;

/// Wire line-length convention: 512 bytes, CRLF included.
pub const MAX_LINE_LEN: usize = 512;

/// Whether the final parameter must be sent with a `:` marker.
///
/// Required when the parameter is empty, starts with `:`, or contains a
/// space; it is always emitted in those cases, never omitted.
fn needs_colon(param: &str) -> bool {
    param.is_empty() || param.starts_with(':') || param.contains(' ')
}

/// Octets that would forge line structure if embedded in any token.
fn has_line_delimiter(s: &str) -> bool {
    s.contains(['\r', '\n', '\0'])
}

impl Message {
    /// Check this message against the wire grammar.
    ///
    /// A message that passes serializes to a line that parses back to the
    /// same structure.
    fn validate(&self) -> Result<(), CodecError> {
        let cmd = &self.command;
        if cmd.is_empty() || cmd.contains(' ') || cmd.starts_with(':') || has_line_delimiter(cmd) {
            return Err(CodecError::Command);
        }

        for (i, param) in self.params.iter().enumerate() {
            let last = i + 1 == self.params.len();
            if has_line_delimiter(param) {
                return Err(CodecError::Param(i));
            }
            if !last && (param.is_empty() || param.contains(' ') || param.starts_with(':')) {
                return Err(CodecError::Param(i));
            }
        }

        Ok(())
    }

    /// Serialize this message to the exact bytes to send on the wire,
    /// CRLF included.
    ///
    /// # Errors
    ///
    /// [`CodecError::Command`] or [`CodecError::Param`] when the message
    /// violates the grammar (empty command, middle parameter with an
    /// embedded space, ...), and [`CodecError::TooLong`] when the encoded
    /// line exceeds [`MAX_LINE_LEN`]. The codec never truncates; the
    /// caller must split the payload before serializing.
    ///
    /// # Example
    ///
    /// ```
    /// use ircwire::Message;
    ///
    /// let msg = Message::new("PRIVMSG", ["#chan", "hello there"]);
    /// assert_eq!(msg.to_wire().unwrap(), b"PRIVMSG #chan :hello there\r\n");
    ///
    /// let bad = Message::new("PRIVMSG", ["bad param", "x"]);
    /// assert!(bad.to_wire().is_err());
    /// ```
    #[must_use = "serialization result should be handled"]
    pub fn to_wire(&self) -> Result<Vec<u8>, CodecError> {
        self.validate()?;

        let line = self.to_string();
        if line.len() > MAX_LINE_LEN {
            return Err(CodecError::TooLong {
                actual: line.len(),
                limit: MAX_LINE_LEN,
            });
        }

        Ok(line.into_bytes())
    }
}

impl Display for Message {
    /// Best-effort wire rendering, CRLF included.
    ///
    /// `Display` does not validate and does not enforce the length
    /// ceiling; [`Message::to_wire`] is the checked entry point.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(ref tags) = self.tags {
            // An empty tag table renders as no tag block at all; a bare
            // `@ ` would not tokenize.
            if !tags.is_empty() {
                write!(f, "@{} ", serialize_tags(tags))?;
            }
        }

        if let Some(ref prefix) = self.prefix {
            write!(f, ":{} ", prefix)?;
        }

        write!(f, "{}", self.command)?;

        if let Some((last, middles)) = self.params.split_last() {
            for param in middles {
                write!(f, " {}", param)?;
            }
            if needs_colon(last) {
                write!(f, " :{}", last)?;
            } else {
                write!(f, " {}", last)?;
            }
        }

        write!(f, "\r\n")
    }
}
