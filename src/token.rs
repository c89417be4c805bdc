//! Classification of raw token text.

/// The canonical whitespace token left in place of whitespace and comments.
pub const WHITESPACE: &str = " ";

/// Whether the token is a quoted string literal or a quoted identifier.
#[must_use]
pub fn is_string_literal(token: &str) -> bool {
    matches!(token.as_bytes().first(), Some(b'\'' | b'"' | b'`'))
}

/// Whether the token is a `#`, `--` or `/* */` comment.
#[must_use]
pub fn is_comment(token: &str) -> bool {
    token.starts_with('#') || token.starts_with("--") || token.starts_with("/*")
}

/// Whether the token consists of whitespace only.
#[must_use]
pub fn is_whitespace(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_whitespace)
}

/// Return the value of a quoted token.
///
/// The delimiters are stripped and a doubled delimiter is collapsed into a
/// single one (`'O''Brien'` becomes `O'Brien`). Callers check
/// [`is_string_literal`] first; a token too short to carry two delimiters
/// yields an empty string.
#[must_use]
pub fn unquote(token: &str) -> String {
    let Some(quote) = token.chars().next() else {
        return String::new();
    };
    let inner = token
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or_default();

    let escaped: String = [quote, quote].iter().collect();
    inner.replace(&escaped, quote.encode_utf8(&mut [0; 4]))
}
