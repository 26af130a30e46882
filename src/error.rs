//! Error types for the codec.
//!
//! Each component surfaces a closed enum of the failures it can actually
//! produce. Parse errors are always local to one line; the codec holds no
//! state that could be corrupted by a failed call.

use thiserror::Error;

/// Errors from unescaping an IRCv3 tag value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TagEscapeError {
    /// A lone `\` at the end of a tag value with nothing following it.
    #[error("truncated escape sequence: trailing backslash")]
    Truncated,
}

/// Errors from tokenizing a raw line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TokenizeError {
    /// The line contained no command token after tags and prefix.
    #[error("missing command")]
    MissingCommand,
}

/// Top-level codec errors.
///
/// Produced by [`Message::parse`](crate::Message::parse) and
/// [`Message::to_wire`](crate::Message::to_wire).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodecError {
    /// The tag block failed to parse.
    #[error("invalid tags: {0}")]
    Tags(#[from] TagEscapeError),

    /// The line failed to tokenize.
    #[error("invalid line: {0}")]
    Tokenize(#[from] TokenizeError),

    /// The command is empty, contains a space, starts with `:`, or
    /// contains a line-delimiter octet.
    #[error("invalid command")]
    Command,

    /// A parameter violates the wire grammar. Carries the parameter index.
    ///
    /// Middle parameters must be non-empty, space-free, must not start
    /// with `:`, and must not contain CR, LF, or NUL. The trailing
    /// parameter is exempt from the first three rules but not the last.
    #[error("invalid parameter at index {0}")]
    Param(usize),

    /// The serialized form exceeds the wire line-length convention.
    ///
    /// The codec never truncates: truncation would corrupt the trailing
    /// parameter. The caller must split or shorten the payload first.
    #[error("message too long: {actual} bytes (limit: {limit})")]
    TooLong {
        /// Encoded length, CRLF included.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },
}
