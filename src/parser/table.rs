//! Table header and table option parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::Error;
use crate::pattern::Element::{self, Literal, StringLiteral};
use crate::pattern::{WS, matches, position};
use crate::schema::Table;
use crate::split::{matching_close_paren, trim};
use crate::token::unquote;

/// Bare option values such as `INNODB` or `UTF8MB4_GENERAL_CI`.
static OPTION_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_$]+$").expect("option value regex is valid"));

const CREATE_TABLE: [Element<'static>; 4] = [Literal("CREATE"), WS, Literal("TABLE"), WS];

/// Supported table-name forms, tried in order, with the token indices of the
/// identifiers they name.
const TABLE_NAME_FORMS: [(&[Element<'static>], &[usize]); 4] = [
    (
        &[
            Literal("CREATE"),
            WS,
            Literal("TABLE"),
            WS,
            StringLiteral,
            Literal("."),
            StringLiteral,
        ],
        &[4, 6],
    ),
    (
        &[Literal("CREATE"), WS, Literal("TABLE"), WS, StringLiteral],
        &[4],
    ),
    (
        &[
            Literal("CREATE"),
            WS,
            Literal("TABLE"),
            WS,
            Literal("IF"),
            WS,
            Literal("NOT"),
            WS,
            Literal("EXISTS"),
            WS,
            StringLiteral,
            Literal("."),
            StringLiteral,
        ],
        &[10, 12],
    ),
    (
        &[
            Literal("CREATE"),
            WS,
            Literal("TABLE"),
            WS,
            Literal("IF"),
            WS,
            Literal("NOT"),
            WS,
            Literal("EXISTS"),
            WS,
            StringLiteral,
        ],
        &[10],
    ),
];

/// Accepted `COMMENT` table option forms with the index of the literal.
const TABLE_COMMENT_FORMS: [(&[Element<'static>], usize); 5] = [
    (&[Literal("COMMENT"), Literal("="), StringLiteral], 2),
    (&[Literal("COMMENT"), WS, Literal("="), StringLiteral], 3),
    (&[Literal("COMMENT"), WS, Literal("="), WS, StringLiteral], 4),
    (&[Literal("COMMENT"), Literal("="), WS, StringLiteral], 3),
    (&[Literal("COMMENT"), WS, StringLiteral], 2),
];

/// A `CREATE TABLE` statement cut into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableClauses<'a, S> {
    /// The table with name, comment and options filled in and no columns.
    pub table: Table,
    /// Tokens between the outermost parentheses, trimmed.
    pub body: &'a [S],
}

/// Whether the statement starts with `CREATE TABLE`.
#[must_use]
pub fn is_create_table<S: AsRef<str>>(statement: &[S]) -> bool {
    matches(statement, &CREATE_TABLE)
}

/// Parse the header and trailing options of a `CREATE TABLE` statement.
///
/// Returns `Ok(None)` for statements that are not `CREATE TABLE`.
///
/// # Errors
///
/// Returns an error if the statement has no body or unbalanced parentheses,
/// if the table name has an unsupported form, or if the table comment is
/// malformed.
pub fn parse_table<S: AsRef<str>>(statement: &[S]) -> Result<Option<TableClauses<'_, S>>, Error> {
    if !is_create_table(statement) {
        return Ok(None);
    }

    let open = position(statement, "(").ok_or(Error::MissingBody)?;
    let close = matching_close_paren(statement, open)?;
    let before = trim(&statement[..open]);
    let body = trim(&statement[open + 1..close]);
    let after = trim(&statement[close + 1..]);

    let mut table = Table::new(table_name(before)?);
    table.comment = table_comment(after)?;
    table.engine = table_option(after, &[Literal("ENGINE")]);
    table.character = table_option(after, &[Literal("CHARSET")]);
    if table.character.is_empty() {
        table.character = table_option(after, &[Literal("CHARACTER"), WS, Literal("SET")]);
    }
    table.collate = table_option(after, &[Literal("COLLATE")]);

    Ok(Some(TableClauses { table, body }))
}

fn table_name<S: AsRef<str>>(before: &[S]) -> Result<String, Error> {
    let (_, identifiers) = TABLE_NAME_FORMS
        .iter()
        .find(|(pattern, _)| matches(before, *pattern))
        .ok_or(Error::InvalidTableName)?;

    let parts: Vec<String> = identifiers
        .iter()
        .map(|&index| unquote(before[index].as_ref()))
        .collect();
    if parts.iter().any(String::is_empty) {
        return Err(Error::InvalidTableName);
    }
    Ok(parts.join("."))
}

/// Extract the table comment, scanning backward for the last `COMMENT`.
fn table_comment<S: AsRef<str>>(after: &[S]) -> Result<String, Error> {
    let Some(last) = after.len().checked_sub(3) else {
        return Ok(String::new());
    };
    let Some(start) = (0..=last).rev().find(|&i| after[i].as_ref() == "COMMENT") else {
        return Ok(String::new());
    };

    let tokens = &after[start..];
    TABLE_COMMENT_FORMS
        .iter()
        .find(|(pattern, _)| matches(tokens, *pattern))
        .map(|&(_, literal)| unquote(tokens[literal].as_ref()))
        .ok_or(Error::InvalidTableComment)
}

/// Value of the first well-formed `key [=] value` table option.
///
/// Malformed options are skipped rather than reported.
fn table_option<S: AsRef<str>>(after: &[S], key: &[Element<'_>]) -> String {
    let value = Element::Regex(&OPTION_VALUE);
    let forms: [&[Element<'_>]; 5] = [
        &[Literal("="), value],
        &[WS, Literal("="), value],
        &[Literal("="), WS, value],
        &[WS, Literal("="), WS, value],
        &[WS, value],
    ];

    (0..after.len())
        .filter(|&i| matches(&after[i..], key))
        .find_map(|i| {
            let rest = &after[i + key.len()..];
            forms
                .iter()
                .find(|form| matches(rest, **form))
                .map(|form| rest[form.len() - 1].as_ref().to_owned())
        })
        .unwrap_or_default()
}
