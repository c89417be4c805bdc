//! Column definition parsing.
//!
//! Every attribute is looked up independently in the fragment, so clauses
//! may appear in any order and unknown clauses are ignored.

use crate::errors::Error;
use crate::pattern::Element::{self, Literal, StringLiteral};
use crate::pattern::{WS, find, matches, position};
use crate::schema::Column;
use crate::split::matching_close_paren;
use crate::token::{WHITESPACE, is_string_literal, unquote};

const NOT_NULL: [Element<'static>; 3] = [Literal("NOT"), WS, Literal("NULL")];
const CHARACTER_SET: [Element<'static>; 4] = [Literal("CHARACTER"), WS, Literal("SET"), WS];
const CHARSET: [Element<'static>; 2] = [Literal("CHARSET"), WS];
const COLLATE: [Element<'static>; 2] = [Literal("COLLATE"), WS];

/// Parse one body fragment into a column.
///
/// Fragments that do not start with a quoted identifier are table
/// constraints (`PRIMARY KEY`, `INDEX`, `CONSTRAINT`, ...) and yield
/// `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the fragment has nothing after the column name, if
/// the column name is empty, or if a `DEFAULT (...)` expression is not
/// closed.
pub fn parse_column<S: AsRef<str>>(fragment: &[S]) -> Result<Option<Column>, Error> {
    let Some(first) = fragment.first().map(|token| token.as_ref()) else {
        return Ok(None);
    };
    if !is_string_literal(first) {
        return Ok(None);
    }
    if fragment.len() < 2 {
        return Err(Error::ColumnTooShort {
            column_tokens: fragment.len(),
        });
    }

    let name = unquote(first);
    if name.is_empty() {
        return Err(Error::EmptyColumnName);
    }

    Ok(Some(Column {
        name,
        data_type: data_type(fragment),
        default_value: default_value(fragment)?,
        comment: comment(fragment),
        not_null: find(fragment, &NOT_NULL).is_some(),
        auto_increment: position(fragment, "AUTO_INCREMENT").is_some(),
        character: character_set(fragment),
        collate: value_after(fragment, &COLLATE),
    }))
}

/// The type tokens following the column name, up to the next whitespace.
fn data_type<S: AsRef<str>>(fragment: &[S]) -> String {
    let mut data_type = String::new();
    if fragment
        .get(2)
        .is_some_and(|token| token.as_ref() == WHITESPACE)
    {
        return data_type;
    }

    for (i, token) in fragment.iter().enumerate().skip(2) {
        let token = token.as_ref();
        if token == WHITESPACE {
            if fragment
                .get(i + 1)
                .is_some_and(|next| next.as_ref() == "UNSIGNED")
            {
                data_type.push_str(" UNSIGNED");
            }
            break;
        }
        data_type.push_str(token);
    }
    data_type
}

/// The value of the first `DEFAULT` clause.
///
/// Only the first `DEFAULT` keyword is considered; unsupported forms such as
/// bare numbers leave the value empty.
fn default_value<S: AsRef<str>>(fragment: &[S]) -> Result<String, Error> {
    let Some(start) = position(fragment, "DEFAULT") else {
        return Ok(String::new());
    };
    let tokens = &fragment[start..];

    if matches(tokens, &[Literal("DEFAULT"), WS, StringLiteral]) {
        return Ok(unquote(tokens[2].as_ref()));
    }
    if matches(tokens, &[Literal("DEFAULT"), WS, Literal("(")]) {
        let close = matching_close_paren(tokens, 2)?;
        return Ok(tokens[3..close].iter().map(|token| token.as_ref()).collect());
    }
    for keyword in ["CURRENT_TIMESTAMP", "NULL"] {
        if matches(tokens, &[Literal("DEFAULT"), WS, Literal(keyword)]) {
            return Ok(keyword.to_owned());
        }
    }
    Ok(String::new())
}

fn comment<S: AsRef<str>>(fragment: &[S]) -> String {
    position(fragment, "COMMENT")
        .map(|start| &fragment[start..])
        .filter(|tokens| matches(*tokens, &[Literal("COMMENT"), WS, StringLiteral]))
        .map(|tokens| unquote(tokens[2].as_ref()))
        .unwrap_or_default()
}

fn character_set<S: AsRef<str>>(fragment: &[S]) -> String {
    let character = value_after(fragment, &CHARACTER_SET);
    if character.is_empty() {
        value_after(fragment, &CHARSET)
    } else {
        character
    }
}

/// The token right after the first match of `pattern`, taken verbatim.
fn value_after<S: AsRef<str>>(fragment: &[S], pattern: &[Element<'_>]) -> String {
    find(fragment, pattern)
        .and_then(|start| fragment.get(start + pattern.len()))
        .map(|token| token.as_ref().to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::normalize::normalize;
    use crate::split::trim;

    fn column(definition: &str) -> Result<Option<Column>, Error> {
        let tokens = normalize(&tokenize(definition).tokens, 0);
        parse_column(trim(&tokens))
    }

    #[test]
    fn test_constraints_are_skipped() {
        assert_eq!(column("PRIMARY KEY (`id`)"), Ok(None));
        assert_eq!(column("UNIQUE KEY `uk_name` (`name`)"), Ok(None));
        assert_eq!(
            column("CONSTRAINT `fk` FOREIGN KEY (`a`) REFERENCES `b` (`id`)"),
            Ok(None)
        );
        assert_eq!(column(""), Ok(None));
    }

    #[test]
    fn test_name_only_is_invalid() {
        assert_eq!(
            column("`lonely`"),
            Err(Error::ColumnTooShort { column_tokens: 1 })
        );
    }

    #[test]
    fn test_empty_name_is_invalid() {
        assert_eq!(column("`` INT"), Err(Error::EmptyColumnName));
    }

    #[test]
    fn test_plain_column() {
        let parsed = column("`id` int").unwrap().unwrap();
        assert_eq!(
            parsed,
            Column {
                name: "id".into(),
                data_type: "INT".into(),
                ..Column::default()
            }
        );
    }

    #[test]
    fn test_data_type() {
        let parsed = column("`price` decimal(10,2) NOT NULL").unwrap().unwrap();
        assert_eq!(parsed.data_type, "DECIMAL(10,2)");
        assert!(parsed.not_null);

        let parsed = column("`id` INT UNSIGNED NOT NULL AUTO_INCREMENT")
            .unwrap()
            .unwrap();
        assert_eq!(parsed.data_type, "INT UNSIGNED");
        assert!(parsed.not_null);
        assert!(parsed.auto_increment);

        let parsed = column("`tags` ENUM('a','b')").unwrap().unwrap();
        assert_eq!(parsed.data_type, "ENUM('a','b')");
    }

    #[test]
    fn test_data_type_needs_leading_whitespace() {
        let parsed = column("`a`INT NOT NULL").unwrap().unwrap();
        assert!(parsed.data_type.is_empty());
        assert!(parsed.not_null);
    }

    #[test]
    fn test_default_forms() {
        let cases = [
            ("`a` VARCHAR(8) DEFAULT 'anon'", "anon"),
            ("`a` VARCHAR(8) DEFAULT 'it''s'", "it's"),
            ("`a` DATETIME DEFAULT (NOW())", "NOW()"),
            ("`a` INT DEFAULT (1 + 2)", "1 + 2"),
            (
                "`a` TIMESTAMP DEFAULT current_timestamp ON UPDATE CURRENT_TIMESTAMP",
                "CURRENT_TIMESTAMP",
            ),
            ("`a` INT DEFAULT NULL", "NULL"),
            ("`a` INT DEFAULT 0", ""),
            ("`a` INT", ""),
        ];
        for (definition, expected) in cases {
            let parsed = column(definition).unwrap().unwrap();
            assert_eq!(parsed.default_value, expected, "{definition}");
        }
    }

    #[test]
    fn test_first_default_is_authoritative() {
        let parsed = column("`a` INT DEFAULT 0 COMMENT 'x' DEFAULT NULL")
            .unwrap()
            .unwrap();
        assert!(parsed.default_value.is_empty());
    }

    #[test]
    fn test_unclosed_default_expression() {
        let tokens = ["`a`", " ", "INT", " ", "DEFAULT", " ", "(", "1"];
        assert_eq!(
            parse_column(&tokens),
            Err(Error::UnbalancedParentheses { open: 2 })
        );
    }

    #[test]
    fn test_comment() {
        let parsed = column("`name` VARCHAR(255) DEFAULT 'anon' COMMENT 'display name'")
            .unwrap()
            .unwrap();
        assert_eq!(parsed.comment, "display name");
        assert_eq!(parsed.default_value, "anon");

        let parsed = column("`name` TEXT COMMENT = 'x'").unwrap().unwrap();
        assert!(parsed.comment.is_empty());
    }

    #[test]
    fn test_character_set_and_collation() {
        let parsed = column(
            "`title` VARCHAR(64) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL",
        )
        .unwrap()
        .unwrap();
        assert_eq!(parsed.character, "UTF8MB4");
        assert_eq!(parsed.collate, "UTF8MB4_BIN");
        assert!(parsed.not_null);

        let parsed = column("`title` TEXT CHARSET latin1").unwrap().unwrap();
        assert_eq!(parsed.character, "LATIN1");
        assert!(parsed.collate.is_empty());
    }

    #[test]
    fn test_null_is_not_not_null() {
        let parsed = column("`a` INT NULL DEFAULT NULL").unwrap().unwrap();
        assert!(!parsed.not_null);
        assert!(parsed.is_nullable());
    }
}
