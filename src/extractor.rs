//! Top-level extraction of tables from SQL text.

use core::fmt;

use crate::errors::Error;
use crate::lexer::{Tokens, tokenize};
use crate::normalize::{DEFAULT_MIN_TOKENS, normalize};
use crate::parser::{TableClauses, parse_column, parse_table};
use crate::schema::Table;
use crate::split::{split_body, split_statements, trim};

/// Where a skipped failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// The input outside of any statement, e.g. a dangling block comment
    /// after the last `;`.
    Input,
    /// A statement, by position among the `;`-separated statements.
    Statement(usize),
    /// A column fragment, by statement position and position in the body.
    Column {
        /// Statement position.
        statement: usize,
        /// Fragment position within the table body.
        fragment: usize,
    },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Input => write!(f, "input"),
            Location::Statement(statement) => write!(f, "statement {statement}"),
            Location::Column {
                statement,
                fragment,
            } => write!(f, "statement {statement}, fragment {fragment}"),
        }
    }
}

/// A failure that was skipped during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the failure happened.
    pub location: Location,
    /// What went wrong.
    pub error: Error,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.error)
    }
}

/// Tables extracted from an input, along with the failures that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Successfully parsed tables in source order.
    pub tables: Vec<Table>,
    /// Statements and columns left out of `tables`.
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// Whether nothing was skipped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Extracts [`Table`]s from SQL text.
///
/// Extraction never fails: invalid statements and columns are left out of
/// the result and logged with [`tracing`].
///
/// # Example
///
/// ```rust
/// use create_table_analyzer::TableExtractor;
///
/// let extractor = TableExtractor::new().with_min_tokens(1);
/// let extraction = extractor.extract_with_diagnostics(
///     "CREATE TABLE `a` (`id` INT); CREATE TABLE `b` (`id` INT",
/// );
/// assert_eq!(extraction.tables.len(), 1);
/// assert_eq!(extraction.diagnostics.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableExtractor {
    min_tokens: usize,
}

impl Default for TableExtractor {
    fn default() -> Self {
        Self {
            min_tokens: DEFAULT_MIN_TOKENS,
        }
    }
}

impl TableExtractor {
    /// Create an extractor with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of raw tokens an input needs to be parsed.
    ///
    /// Shorter inputs are treated as containing no statements.
    #[must_use]
    pub fn with_min_tokens(mut self, min_tokens: usize) -> Self {
        self.min_tokens = min_tokens;
        self
    }

    /// The minimum number of raw tokens an input needs to be parsed.
    #[must_use]
    pub fn min_tokens(&self) -> usize {
        self.min_tokens
    }

    /// Extract the tables defined in `sql`, in source order.
    #[must_use]
    pub fn extract(&self, sql: &str) -> Vec<Table> {
        self.extract_with_diagnostics(sql).tables
    }

    /// Extract the tables defined in `sql` and report what was skipped.
    #[must_use]
    pub fn extract_with_diagnostics(&self, sql: &str) -> Extraction {
        let mut extraction = Extraction::default();

        let Tokens { tokens: raw, error } = tokenize(sql);
        let tokens = normalize(&raw, self.min_tokens);
        let statements = split_statements(&tokens);
        let broken = if error.is_some() {
            last_statement(&tokens, statements.len())
        } else {
            None
        };

        for (index, statement) in statements.into_iter().enumerate() {
            if broken == Some(index) {
                if let Some(error) = &error {
                    tracing::warn!(statement = index, %error, "skipping unterminated statement");
                    extraction.diagnostics.push(Diagnostic {
                        location: Location::Statement(index),
                        error: error.clone().into(),
                    });
                }
                continue;
            }
            if let Some(table) = parse_statement(index, statement, &mut extraction.diagnostics) {
                extraction.tables.push(table);
            }
        }

        if let Some(error) = error.filter(|_| broken.is_none()) {
            tracing::warn!(%error, "unterminated token after the last statement");
            extraction.diagnostics.push(Diagnostic {
                location: Location::Input,
                error: error.into(),
            });
        }
        extraction
    }
}

/// Index of the statement holding the last token, if that token belongs to
/// a statement at all.
///
/// An unterminated literal or comment always runs to the end of the input,
/// so only the last `;`-separated chunk can contain it.
fn last_statement(tokens: &[String], statements: usize) -> Option<usize> {
    let tail = tokens.rsplit(|token| token == ";").next()?;
    if trim(tail).is_empty() {
        None
    } else {
        statements.checked_sub(1)
    }
}

/// Parse one statement, recording skipped failures in `diagnostics`.
fn parse_statement<S: AsRef<str>>(
    index: usize,
    statement: &[S],
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Table> {
    let TableClauses { mut table, body } = match parse_table(statement) {
        Ok(Some(clauses)) => clauses,
        Ok(None) => {
            tracing::debug!(statement = index, "skipping statement that is not CREATE TABLE");
            return None;
        }
        Err(error) => {
            tracing::warn!(statement = index, %error, "skipping invalid statement");
            diagnostics.push(Diagnostic {
                location: Location::Statement(index),
                error,
            });
            return None;
        }
    };

    for (fragment, tokens) in split_body(body).into_iter().enumerate() {
        match parse_column(tokens) {
            Ok(Some(column)) => table.columns.push(column),
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(
                    statement = index,
                    fragment,
                    table = %table.name,
                    %error,
                    "skipping invalid column"
                );
                diagnostics.push(Diagnostic {
                    location: Location::Column {
                        statement: index,
                        fragment,
                    },
                    error,
                });
            }
        }
    }

    tracing::debug!(
        statement = index,
        table = %table.name,
        columns = table.columns.len(),
        "parsed table"
    );
    Some(table)
}

/// Extract the tables defined in `sql` with the default settings.
///
/// # Example
///
/// ```rust
/// use create_table_analyzer::extract_tables;
///
/// let tables = extract_tables("CREATE TABLE `t` (`a` INT, `b` TEXT); INSERT INTO `t` VALUES (1, 'x');");
/// assert_eq!(tables.len(), 1);
/// assert_eq!(tables[0].column_names(), vec!["a", "b"]);
/// ```
#[must_use]
pub fn extract_tables(sql: &str) -> Vec<Table> {
    TableExtractor::new().extract(sql)
}
