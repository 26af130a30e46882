//! Line tokenizer.
//!
//! Splits one raw line (trailing CR/LF already stripped) into the ordered
//! grammar tokens: tag block, prefix, command, middle parameters, and the
//! trailing parameter. All tokens borrow from the input line, so
//! tokenizing allocates nothing.
//!
//! IRC whitespace handling is uneven on purpose: runs of spaces between
//! tokens collapse to a single separator, but the trailing parameter
//! keeps its spaces verbatim.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::opt,
    sequence::preceded,
    IResult,
};
use smallvec::SmallVec;

use crate::error::TokenizeError;

/// Tag token: `@` followed by everything up to the next space run.
fn tag_token(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_while1(|c| c != ' '))(input)
}

/// Prefix token: `:` followed by everything up to the next space run.
fn prefix_token(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

/// Command token: the next non-empty run of non-space characters.
///
/// Shape validation (letters vs digits) is a serialize-time concern; the
/// tokenizer accepts whatever the peer sent.
fn command_token(input: &str) -> IResult<&str, &str> {
    take_while1(|c| c != ' ')(input)
}

/// Consume the parameter region after the command.
///
/// Middle parameters split on space runs until one starts with `:`; from
/// there the rest of the line is the trailing parameter, verbatim.
fn parse_params(input: &str) -> (SmallVec<[&str; 15]>, Option<&str>) {
    let mut middles: SmallVec<[&str; 15]> = SmallVec::new();
    let mut rest = input;

    loop {
        while rest.as_bytes().first() == Some(&b' ') {
            rest = &rest[1..];
        }
        if rest.is_empty() {
            return (middles, None);
        }
        if let Some(trailing) = rest.strip_prefix(':') {
            return (middles, Some(trailing));
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        middles.push(&rest[..end]);
        rest = &rest[end..];
    }
}

fn line_tokens(input: &str) -> IResult<&str, RawLine<'_>> {
    let (input, _) = space0(input)?;
    let (input, tags) = opt(tag_token)(input)?;
    let (input, _) = space0(input)?;
    let (input, prefix) = opt(prefix_token)(input)?;
    let (input, _) = space0(input)?;
    let (input, command) = command_token(input)?;
    let (middles, trailing) = parse_params(input);

    Ok((
        "",
        RawLine {
            tags,
            prefix,
            command,
            middles,
            trailing,
        },
    ))
}

/// One tokenized line, borrowing from the input.
///
/// This is the zero-copy intermediate between raw bytes and an owned
/// [`Message`](crate::Message). It is public so callers that only need to
/// inspect a line (e.g. to route on the command) can avoid allocating.
///
/// # Example
///
/// ```
/// use ircwire::RawLine;
///
/// let raw = RawLine::tokenize(":dan!d@localhost PRIVMSG #chan :Hey!").unwrap();
/// assert_eq!(raw.command, "PRIVMSG");
/// assert_eq!(raw.prefix, Some("dan!d@localhost"));
/// assert_eq!(raw.middles.as_slice(), &["#chan"]);
/// assert_eq!(raw.trailing, Some("Hey!"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RawLine<'a> {
    /// Raw tag block (without the leading `@`), if present.
    pub tags: Option<&'a str>,
    /// Raw prefix (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    /// The command token, as sent (not case-normalized).
    pub command: &'a str,
    /// Middle parameters: non-empty, space-free tokens.
    pub middles: SmallVec<[&'a str; 15]>,
    /// Trailing parameter, spaces preserved verbatim; may be empty.
    pub trailing: Option<&'a str>,
}

impl<'a> RawLine<'a> {
    /// Tokenize one line with any trailing CR/LF already stripped.
    ///
    /// The only way a line fails to tokenize is by running out of input
    /// before a command token is found.
    #[must_use = "tokenize result should be handled"]
    pub fn tokenize(line: &'a str) -> Result<Self, TokenizeError> {
        match line_tokens(line) {
            Ok((_, raw)) => Ok(raw),
            Err(_) => Err(TokenizeError::MissingCommand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_command() {
        let raw = RawLine::tokenize("PING").unwrap();
        assert_eq!(raw.command, "PING");
        assert!(raw.tags.is_none());
        assert!(raw.prefix.is_none());
        assert!(raw.middles.is_empty());
        assert!(raw.trailing.is_none());
    }

    #[test]
    fn test_command_with_params() {
        let raw = RawLine::tokenize("PRIVMSG #channel :Hello, world!").unwrap();
        assert_eq!(raw.command, "PRIVMSG");
        assert_eq!(raw.middles.as_slice(), &["#channel"]);
        assert_eq!(raw.trailing, Some("Hello, world!"));
    }

    #[test]
    fn test_with_prefix() {
        let raw = RawLine::tokenize(":nick!user@host PRIVMSG #channel :Hello").unwrap();
        assert_eq!(raw.prefix, Some("nick!user@host"));
        assert_eq!(raw.command, "PRIVMSG");
    }

    #[test]
    fn test_with_tags_and_prefix() {
        let raw =
            RawLine::tokenize("@time=2023-01-01T00:00:00Z :nick PRIVMSG #ch :Hi").unwrap();
        assert_eq!(raw.tags, Some("time=2023-01-01T00:00:00Z"));
        assert_eq!(raw.prefix, Some("nick"));
        assert_eq!(raw.command, "PRIVMSG");
        assert_eq!(raw.middles.as_slice(), &["#ch"]);
        assert_eq!(raw.trailing, Some("Hi"));
    }

    #[test]
    fn test_space_runs_collapse_between_params() {
        let raw = RawLine::tokenize("USER   guest  0   * :Real Name").unwrap();
        assert_eq!(raw.middles.as_slice(), &["guest", "0", "*"]);
        assert_eq!(raw.trailing, Some("Real Name"));
    }

    #[test]
    fn test_leading_spaces_skipped() {
        let raw = RawLine::tokenize("   PING").unwrap();
        assert_eq!(raw.command, "PING");
    }

    #[test]
    fn test_trailing_keeps_spaces_verbatim() {
        let raw = RawLine::tokenize("PRIVMSG #chan :hello there  friend").unwrap();
        assert_eq!(raw.trailing, Some("hello there  friend"));
    }

    #[test]
    fn test_empty_trailing() {
        let raw = RawLine::tokenize("PRIVMSG #channel :").unwrap();
        assert_eq!(raw.middles.as_slice(), &["#channel"]);
        assert_eq!(raw.trailing, Some(""));
    }

    #[test]
    fn test_trailing_with_embedded_colon() {
        let raw = RawLine::tokenize("PRIVMSG #chan :a:b :c").unwrap();
        assert_eq!(raw.trailing, Some("a:b :c"));
    }

    #[test]
    fn test_colon_inside_middle_is_not_trailing() {
        // Only a `:` at the start of a token opens the trailing parameter.
        let raw = RawLine::tokenize("MODE nick a:b").unwrap();
        assert_eq!(raw.middles.as_slice(), &["nick", "a:b"]);
        assert!(raw.trailing.is_none());
    }

    #[test]
    fn test_no_param_ceiling() {
        let line = format!(
            "CMD {}",
            (1..=20).map(|i| format!("p{}", i)).collect::<Vec<_>>().join(" ")
        );
        let raw = RawLine::tokenize(&line).unwrap();
        assert_eq!(raw.middles.len(), 20);
        assert_eq!(raw.middles[19], "p20");
    }

    #[test]
    fn test_empty_line_is_missing_command() {
        assert_eq!(
            RawLine::tokenize(""),
            Err(TokenizeError::MissingCommand)
        );
        assert_eq!(
            RawLine::tokenize("   "),
            Err(TokenizeError::MissingCommand)
        );
    }

    #[test]
    fn test_tags_or_prefix_without_command() {
        assert_eq!(
            RawLine::tokenize("@id=1"),
            Err(TokenizeError::MissingCommand)
        );
        assert_eq!(
            RawLine::tokenize(":irc.example.com"),
            Err(TokenizeError::MissingCommand)
        );
        assert_eq!(
            RawLine::tokenize("@id=1 :irc.example.com "),
            Err(TokenizeError::MissingCommand)
        );
    }

    #[test]
    fn test_numeric_command() {
        let raw = RawLine::tokenize(":irc.example.com 001 nick :Welcome").unwrap();
        assert_eq!(raw.prefix, Some("irc.example.com"));
        assert_eq!(raw.command, "001");
        assert_eq!(raw.middles.as_slice(), &["nick"]);
        assert_eq!(raw.trailing, Some("Welcome"));
    }
}
