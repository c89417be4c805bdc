//! Bracket matching and splitting of normalized token sequences.

use crate::errors::Error;
use crate::token::WHITESPACE;

/// Strip one leading and one trailing whitespace token.
#[must_use]
pub fn trim<S: AsRef<str>>(tokens: &[S]) -> &[S] {
    let tokens = match tokens.split_first() {
        Some((first, rest)) if first.as_ref() == WHITESPACE => rest,
        _ => tokens,
    };
    match tokens.split_last() {
        Some((last, rest)) if last.as_ref() == WHITESPACE => rest,
        _ => tokens,
    }
}

/// Index of the `)` closing the parenthesis at `open`.
///
/// # Errors
///
/// Returns [`Error::UnbalancedParentheses`] if the tokens end before the
/// parenthesis is closed.
pub fn matching_close_paren<S: AsRef<str>>(tokens: &[S], open: usize) -> Result<usize, Error> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.as_ref() {
            "(" => depth += 1,
            ")" => depth = depth.saturating_sub(1),
            _ => {}
        }
        if depth == 0 {
            return Ok(i);
        }
    }
    Err(Error::UnbalancedParentheses { open })
}

/// Split a token stream into statements on every `;`.
///
/// Each statement is trimmed and empty statements are dropped.
#[must_use]
pub fn split_statements<S: AsRef<str>>(tokens: &[S]) -> Vec<&[S]> {
    tokens
        .split(|token| token.as_ref() == ";")
        .map(trim)
        .filter(|statement| !statement.is_empty())
        .collect()
}

/// Split a table body into column and constraint fragments.
///
/// Only commas outside of parentheses separate fragments, so
/// `DECIMAL(10,2)` or `DEFAULT (IF(a, b, c))` stay in one piece.
#[must_use]
pub fn split_body<S: AsRef<str>>(tokens: &[S]) -> Vec<&[S]> {
    let mut fragments = Vec::new();
    let mut depth = 0i64;
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token.as_ref() {
            "(" => depth += 1,
            ")" => depth -= 1,
            "," if depth == 0 => {
                fragments.push(trim(&tokens[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = trim(&tokens[start..]);
    if !last.is_empty() {
        fragments.push(last);
    }
    fragments
}
