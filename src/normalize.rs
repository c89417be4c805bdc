//! Normalization of raw lexer output.

use crate::token::{WHITESPACE, is_comment, is_string_literal, is_whitespace};

/// Default minimum number of raw tokens an input needs to be parsed at all.
pub const DEFAULT_MIN_TOKENS: usize = 10;

/// Map raw tokens to their normalized form.
///
/// Literals are kept verbatim, comments and whitespace become a single
/// [`WHITESPACE`] token and every other token is uppercased. Runs of
/// whitespace tokens collapse into one. Inputs with fewer than
/// `min_tokens` raw tokens normalize to an empty sequence.
#[must_use]
pub fn normalize<S: AsRef<str>>(raw: &[S], min_tokens: usize) -> Vec<String> {
    if raw.len() < min_tokens {
        return Vec::new();
    }

    let mut tokens: Vec<String> = Vec::with_capacity(raw.len());
    for token in raw {
        let token = token.as_ref();
        if is_string_literal(token) {
            tokens.push(token.to_owned());
        } else if is_comment(token) || is_whitespace(token) {
            if tokens.last().is_none_or(|last| last != WHITESPACE) {
                tokens.push(WHITESPACE.to_owned());
            }
        } else {
            tokens.push(token.to_uppercase());
        }
    }

    tracing::trace!(raw = raw.len(), normalized = tokens.len(), "normalized tokens");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_is_skipped() {
        let raw = ["CREATE", " ", "TABLE"];
        assert!(normalize(&raw, DEFAULT_MIN_TOKENS).is_empty());
        assert_eq!(normalize(&raw, 3), vec!["CREATE", " ", "TABLE"]);
    }

    #[test]
    fn test_case_folding_spares_literals() {
        let raw = ["create", " ", "table", " ", "`Users`", "(", "'MiXeD'", ")"];
        assert_eq!(
            normalize(&raw, 0),
            vec!["CREATE", " ", "TABLE", " ", "`Users`", "(", "'MiXeD'", ")"]
        );
    }

    #[test]
    fn test_whitespace_and_comments_collapse() {
        let raw = ["a", "\n  ", "-- note", "\n", "/* x */", "b", " ", "# end"];
        assert_eq!(normalize(&raw, 0), vec!["A", " ", "B", " "]);
    }
}
