//! A small declarative language for matching token windows.
//!
//! A pattern is a slice of [`Element`]s compared position by position
//! against the start of a token slice. Trailing tokens are ignored.

use regex::Regex;

use crate::token::{WHITESPACE, is_string_literal};

/// One position of a pattern.
#[derive(Debug, Clone, Copy)]
pub enum Element<'a> {
    /// The token must equal this text exactly.
    Literal(&'a str),
    /// The token must be a quoted literal or identifier.
    StringLiteral,
    /// The token must match this regular expression.
    Regex(&'a Regex),
}

/// Element matching the canonical whitespace token.
pub const WS: Element<'static> = Element::Literal(WHITESPACE);

impl Element<'_> {
    /// Whether the element accepts `token`.
    #[must_use]
    pub fn accepts(&self, token: &str) -> bool {
        match self {
            Element::Literal(expected) => token == *expected,
            Element::StringLiteral => is_string_literal(token),
            Element::Regex(regex) => regex.is_match(token),
        }
    }
}

/// Whether `pattern` matches the start of `tokens`.
#[must_use]
pub fn matches<S: AsRef<str>>(tokens: &[S], pattern: &[Element<'_>]) -> bool {
    tokens.len() >= pattern.len()
        && pattern
            .iter()
            .zip(tokens)
            .all(|(element, token)| element.accepts(token.as_ref()))
}

/// Index of the first position in `tokens` where `pattern` matches.
#[must_use]
pub fn find<S: AsRef<str>>(tokens: &[S], pattern: &[Element<'_>]) -> Option<usize> {
    (0..tokens.len()).find(|&start| matches(&tokens[start..], pattern))
}

/// Index of the first token equal to `keyword`.
#[must_use]
pub fn position<S: AsRef<str>>(tokens: &[S], keyword: &str) -> Option<usize> {
    tokens.iter().position(|token| token.as_ref() == keyword)
}
