//! Submodule defining the errors used across the crate.

use crate::lexer::LexerError;

/// Structural failures that make a statement or a column fragment invalid.
///
/// Statements that are simply not `CREATE TABLE` statements and body
/// fragments that are table constraints are not errors: the parsers report
/// them as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A string literal or block comment is never terminated.
    #[error("Lexer error: {0}")]
    Lexer(#[from] LexerError),

    /// The parenthesis opened at the given token index is never closed.
    #[error("Unbalanced parentheses: '(' at token {open} is never closed")]
    UnbalancedParentheses {
        /// Token index of the opening parenthesis.
        open: usize,
    },

    /// The `CREATE TABLE` statement has no parenthesized body.
    #[error("Invalid sql create statement: missing column definitions")]
    MissingBody,

    /// The statement header does not match any supported table-name form.
    #[error("Invalid sql create statement: unrecognized table name")]
    InvalidTableName,

    /// A `COMMENT` table option is present but malformed.
    #[error("Invalid sql create statement: malformed table comment")]
    InvalidTableComment,

    /// A column definition names its column with an empty identifier.
    #[error("Invalid sql create statement: empty column name")]
    EmptyColumnName,

    /// A column definition consists of its name only.
    #[error("Invalid sql create statement: column definition has {column_tokens} token(s)")]
    ColumnTooShort {
        /// Number of tokens in the column fragment.
        column_tokens: usize,
    },
}
