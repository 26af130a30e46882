//! IRC message prefix types.
//!
//! A prefix identifies the origin of a message: either a server name or a
//! user's `nick!user@host` mask.
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format

use std::str::FromStr;

/// IRC message prefix - identifies the origin of a message.
///
/// A prefix is never empty; a message without an origin carries
/// `Option<Prefix>::None`, not an empty value.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prefix {
    /// Server name (e.g., `irc.example.com`).
    Server(String),
    /// User origin. `nick` is required; `user` and `host` are present
    /// independently of one another.
    User {
        /// Nickname of the sender.
        nick: String,
        /// Ident/username, if the origin carried a `!user` part.
        user: Option<String>,
        /// Hostname, if the origin carried an `@host` part.
        host: Option<String>,
    },
}

impl Prefix {
    /// Parse a prefix string (without the leading `:`).
    ///
    /// This is a lenient parser and never fails: anything that does not
    /// fit the `nick!user@host` shapes degrades to a bare nick, or to a
    /// server name if the text contains a `.`.
    ///
    /// # Example
    ///
    /// ```
    /// use ircwire::Prefix;
    ///
    /// let p = Prefix::parse("dan!d@localhost");
    /// assert_eq!(p.nick(), Some("dan"));
    /// assert_eq!(p.user(), Some("d"));
    /// assert_eq!(p.host(), Some("localhost"));
    ///
    /// assert!(Prefix::parse("irc.example.com").is_server());
    /// ```
    pub fn parse(s: &str) -> Self {
        // The nick delimiter is the first `!`; an `@` only counts as the
        // host delimiter when it appears after it.
        if let Some(bang) = s.find('!') {
            let nick = &s[..bang];
            let rest = &s[bang + 1..];
            let (user, host) = match rest.find('@') {
                Some(at) => (&rest[..at], Some(&rest[at + 1..])),
                None => (rest, None),
            };
            return Prefix::User {
                nick: nick.to_owned(),
                user: Some(user.to_owned()),
                host: host.map(str::to_owned),
            };
        }

        if let Some(at) = s.find('@') {
            return Prefix::User {
                nick: s[..at].to_owned(),
                user: None,
                host: Some(s[at + 1..].to_owned()),
            };
        }

        if s.contains('.') {
            return Prefix::Server(s.to_owned());
        }

        // Bare nick, e.g. short-lived registration-phase messages.
        Prefix::User {
            nick: s.to_owned(),
            user: None,
            host: None,
        }
    }

    /// Create a user prefix from nick, user, and host components.
    pub fn new_user(
        nick: impl Into<String>,
        user: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Prefix::User {
            nick: nick.into(),
            user: Some(user.into()),
            host: Some(host.into()),
        }
    }

    /// Create a server prefix.
    pub fn new_server(host: impl Into<String>) -> Self {
        Prefix::Server(host.into())
    }

    /// Whether this prefix is a server origin.
    pub fn is_server(&self) -> bool {
        matches!(self, Prefix::Server(_))
    }

    /// Get the nickname if this is a user prefix.
    pub fn nick(&self) -> Option<&str> {
        match self {
            Prefix::User { nick, .. } if !nick.is_empty() => Some(nick),
            _ => None,
        }
    }

    /// Get the username if this is a user prefix.
    pub fn user(&self) -> Option<&str> {
        match self {
            Prefix::User { user, .. } => user.as_deref(),
            _ => None,
        }
    }

    /// Get the hostname.
    pub fn host(&self) -> Option<&str> {
        match self {
            Prefix::Server(name) => Some(name),
            Prefix::User { host, .. } => host.as_deref(),
        }
    }
}

impl FromStr for Prefix {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Prefix::parse(s))
    }
}

impl From<&str> for Prefix {
    fn from(s: &str) -> Self {
        Prefix::parse(s)
    }
}
