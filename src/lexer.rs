//! Raw MySQL lexer.
//!
//! Unlike a classic lexer the output keeps every byte of the input: string
//! literals keep their delimiters, and comments and whitespace come out as
//! tokens of their own. Classification happens later, on the token text.

/// Two-byte operators emitted as a single token.
const TWO_BYTE_OPERATORS: [&[u8; 2]; 10] = [
    b"<=", b">=", b"<>", b"!=", b":=", b"||", b"&&", b"<<", b">>", b"->",
];

/// SQL lexer that slices its input into raw tokens.
///
/// Lexing never fails. A string literal or block comment that is never
/// closed runs to the end of the input and is emitted as one token; the
/// lexer remembers it as an error for the caller to attribute.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    error: Option<LexerError>,
}

/// Raw tokens of an input and the unterminated token it ended in, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    /// Tokens in source order, covering the whole input.
    pub tokens: Vec<&'a str>,
    /// Set when the last token is an unterminated literal or comment.
    pub error: Option<LexerError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            error: None,
        }
    }

    /// The unterminated literal or comment met so far, if any.
    #[must_use]
    pub fn error(&self) -> Option<&LexerError> {
        self.error.as_ref()
    }

    /// Consume the whole input and return its tokens in source order.
    #[must_use]
    pub fn tokenize(mut self) -> Tokens<'a> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        Tokens {
            tokens,
            error: self.error,
        }
    }

    /// Consume and return the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let bytes = self.input.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        let b = bytes[start];
        let next = bytes.get(start + 1).copied();

        match b {
            b'\'' | b'"' | b'`' => self.read_string(start),
            b'#' => self.read_line_comment(),
            b'-' if next == Some(b'-') => self.read_line_comment(),
            b'/' if next == Some(b'*') => self.read_block_comment(start),
            _ if b.is_ascii_whitespace() => {
                while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                    self.pos += 1;
                }
            }
            _ if is_word_byte(b) => self.read_word(),
            _ => {
                let pair = next.map(|n| [b, n]);
                if pair.is_some_and(|pair| TWO_BYTE_OPERATORS.contains(&&pair)) {
                    self.pos += 2;
                } else {
                    // Advance by a whole character so slices stay on UTF-8 boundaries.
                    let len = self.input[start..].chars().next().map_or(1, char::len_utf8);
                    self.pos += len;
                }
            }
        }

        Some(&self.input[start..self.pos])
    }

    fn read_string(&mut self, start: usize) {
        let bytes = self.input.as_bytes();
        let quote = bytes[start];
        self.pos += 1;

        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            if b == quote {
                // Doubled delimiter is an escaped delimiter
                if bytes.get(self.pos + 1) == Some(&quote) {
                    self.pos += 2;
                } else {
                    self.pos += 1;
                    return;
                }
            } else if b == b'\\' && quote != b'`' {
                self.pos += 2;
            } else {
                self.pos += 1;
            }
        }

        self.pos = bytes.len();
        self.error = Some(LexerError::UnterminatedString { pos: start });
    }

    fn read_line_comment(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos] != b'\n' {
            self.pos += 1;
        }
    }

    fn read_block_comment(&mut self, start: usize) {
        let bytes = self.input.as_bytes();
        self.pos += 2;
        while self.pos + 1 < bytes.len() {
            if bytes[self.pos] == b'*' && bytes[self.pos + 1] == b'/' {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
        self.pos = bytes.len();
        self.error = Some(LexerError::UnterminatedComment { pos: start });
    }

    fn read_word(&mut self) {
        let bytes = self.input.as_bytes();
        let numeric = bytes[self.pos].is_ascii_digit();
        while self.pos < bytes.len() && is_word_byte(bytes[self.pos]) {
            self.pos += 1;
        }

        // Decimal part of a numeric literal such as `3.14`
        if numeric
            && bytes.get(self.pos) == Some(&b'.')
            && bytes.get(self.pos + 1).is_some_and(u8::is_ascii_digit)
        {
            self.pos += 1;
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
        }
    }
}

/// Tokenize `input` into raw tokens.
#[must_use]
pub fn tokenize(input: &str) -> Tokens<'_> {
    Lexer::new(input).tokenize()
}

/// Check if a byte belongs to a bare word (identifier, keyword or number).
///
/// Bytes of multi-byte UTF-8 sequences are word bytes, so non-ASCII
/// identifiers stay in one piece.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || !b.is_ascii()
}

/// Unterminated tokens met during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    /// Unterminated string literal or quoted identifier.
    #[error("Unterminated string literal starting at position {pos}")]
    UnterminatedString {
        /// Position where the literal started.
        pos: usize,
    },
    /// Unterminated block comment.
    #[error("Unterminated block comment starting at position {pos}")]
    UnterminatedComment {
        /// Position where the comment started.
        pos: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_whitespace() {
        let tokens = tokenize("CREATE  TABLE\tusers").tokens;
        assert_eq!(tokens, vec!["CREATE", "  ", "TABLE", "\t", "users"]);
    }

    #[test]
    fn test_strings_keep_delimiters() {
        let tokens = tokenize("'it''s' \"a\\\"b\" `we``ird`").tokens;
        assert_eq!(tokens, vec!["'it''s'", " ", "\"a\\\"b\"", " ", "`we``ird`"]);
    }

    #[test]
    fn test_comments() {
        let tokens = tokenize("a -- line\nb # hash\nc /* block\n */d").tokens;
        assert_eq!(
            tokens,
            vec![
                "a",
                " ",
                "-- line",
                "\n",
                "b",
                " ",
                "# hash",
                "\n",
                "c",
                " ",
                "/* block\n */",
                "d"
            ]
        );
    }

    #[test]
    fn test_symbols_and_numbers() {
        let tokens = tokenize("DECIMAL(10,2) DEFAULT 3.14 a<=b x.y").tokens;
        assert_eq!(
            tokens,
            vec![
                "DECIMAL", "(", "10", ",", "2", ")", " ", "DEFAULT", " ", "3.14", " ", "a", "<=",
                "b", " ", "x", ".", "y"
            ]
        );
    }

    #[test]
    fn test_non_ascii() {
        let tokens = tokenize("'héllo' ünïcode§x").tokens;
        assert_eq!(tokens, vec!["'héllo'", " ", "ünïcode§x"]);
    }

    #[test]
    fn test_unterminated_string() {
        let lexed = tokenize("CREATE TABLE 'abc; DROP");
        assert_eq!(lexed.tokens, vec!["CREATE", " ", "TABLE", " ", "'abc; DROP"]);
        assert_eq!(
            lexed.error,
            Some(LexerError::UnterminatedString { pos: 13 })
        );
    }

    #[test]
    fn test_unterminated_string_after_backslash() {
        let lexed = tokenize("x 'ab\\");
        assert_eq!(lexed.tokens, vec!["x", " ", "'ab\\"]);
        assert_eq!(lexed.error, Some(LexerError::UnterminatedString { pos: 2 }));
    }

    #[test]
    fn test_unterminated_comment() {
        let lexed = tokenize("a /* never closed");
        assert_eq!(lexed.tokens, vec!["a", " ", "/* never closed"]);
        assert_eq!(
            lexed.error,
            Some(LexerError::UnterminatedComment { pos: 2 })
        );
    }

    #[test]
    fn test_error_is_visible_while_lexing() {
        let mut lexer = Lexer::new("`a` `b");
        assert_eq!(lexer.next_token(), Some("`a`"));
        assert_eq!(lexer.error(), None);
        assert_eq!(lexer.next_token(), Some(" "));
        assert_eq!(lexer.next_token(), Some("`b"));
        assert_eq!(
            lexer.error(),
            Some(&LexerError::UnterminatedString { pos: 4 })
        );
        assert_eq!(lexer.next_token(), None);
    }

    #[test]
    fn test_terminated_input_has_no_error() {
        assert_eq!(tokenize("CREATE TABLE `t` (`a` INT)").error, None);
    }

    #[test]
    fn test_tokens_cover_input() {
        let sql = "CREATE TABLE `t` (`a` INT) COMMENT='x';\n-- done";
        assert_eq!(tokenize(sql).tokens.concat(), sql);
    }
}
