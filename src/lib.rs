//! # ircwire
//!
//! A wire-format codec for IRC protocol messages: RFC 1459 grammar plus
//! the IRCv3 message-tag extension.
//!
//! The codec is a pure, stateless transform. One complete
//! delimiter-stripped line of bytes in, one structured [`Message`] out,
//! and the reverse with full validation. It never buffers partial lines
//! and never detects line boundaries; that is the network layer's job.
//!
//! ## Features
//!
//! - Message parsing with tags, prefixes, commands, and parameters
//! - IRCv3 tag-value escaping with exact round trips
//! - Zero-copy line tokenizing via [`RawLine`]
//! - Serialize-time grammar validation and 512-byte length policy
//! - Lossy UTF-8 payload repair; malformed bytes never fail a message

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ### Parsing
//!
//! ```rust
//! use ircwire::Message;
//!
//! let raw = b"@id=234;rose :dan!d@localhost PRIVMSG #chan :Hey!";
//! let msg = Message::parse(raw).expect("valid IRC line");
//!
//! assert_eq!(msg.command, "PRIVMSG");
//! assert_eq!(msg.tag_value("id"), Some("234"));
//! assert_eq!(msg.source_nickname(), Some("dan"));
//! assert_eq!(msg.params, vec!["#chan", "Hey!"]);
//! ```
//!
//! ### Constructing and serializing
//!
//! ```rust
//! use ircwire::{Message, Prefix};
//!
//! let msg = Message::new("PRIVMSG", ["#rust", "Hello, world!"])
//!     .with_tag("time", "2023-01-01T12:00:00Z")
//!     .with_prefix(Prefix::parse("bot!bot@example.com"));
//!
//! let wire = msg.to_wire().expect("valid message");
//! assert!(wire.ends_with(b"\r\n"));
//! ```
//!
//! Because each call only reads its input and allocates a fresh output,
//! `parse` and `to_wire` may be invoked concurrently from any number of
//! threads with no synchronization.

pub mod error;
pub mod message;
pub mod prefix;
pub mod tags;

pub use self::error::{CodecError, TagEscapeError, TokenizeError};
pub use self::message::{Message, RawLine, MAX_LINE_LEN};
pub use self::prefix::Prefix;
pub use self::tags::{TagMap, TagValue};
