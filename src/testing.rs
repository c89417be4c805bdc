//! Shared invariant checks for fuzzing and regression tests.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`check_extraction`]: extract tables from arbitrary input and assert the
//!   invariants every extraction must uphold
//! - [`run_regression_inputs`]: replay every file of a directory through
//!   [`check_extraction`]

use std::fs;
use std::path::Path;

use crate::{Error, Extraction, Location, TableExtractor};

/// Extract tables from `sql` and assert the extraction invariants.
///
/// - every table has a non-empty name and every column a non-empty name;
/// - `extract` and `extract_with_diagnostics` agree;
/// - extraction is deterministic;
/// - at most one unterminated literal or comment is reported, after every
///   other failure, and only such a failure is reported on the input as a
///   whole.
///
/// # Panics
///
/// Panics if an invariant does not hold.
pub fn check_extraction(sql: &str) -> Extraction {
    let extractor = TableExtractor::new();
    let extraction = extractor.extract_with_diagnostics(sql);

    for table in &extraction.tables {
        assert!(!table.name.is_empty(), "table with empty name from {sql:?}");
        for column in &table.columns {
            assert!(
                !column.name.is_empty(),
                "column with empty name in table {:?} from {sql:?}",
                table.name
            );
        }
    }

    assert_eq!(extractor.extract(sql), extraction.tables);
    assert_eq!(extractor.extract_with_diagnostics(sql), extraction);

    let lexer_failures: Vec<usize> = extraction
        .diagnostics
        .iter()
        .enumerate()
        .filter(|(_, diagnostic)| matches!(diagnostic.error, Error::Lexer(_)))
        .map(|(index, _)| index)
        .collect();
    assert!(
        lexer_failures.len() <= 1,
        "more than one unterminated token in {sql:?}"
    );
    if let Some(&index) = lexer_failures.first() {
        assert_eq!(
            index,
            extraction.diagnostics.len() - 1,
            "unterminated token is not the last failure in {sql:?}"
        );
    }
    for diagnostic in &extraction.diagnostics {
        if diagnostic.location == Location::Input {
            assert!(matches!(diagnostic.error, Error::Lexer(_)));
        }
    }

    extraction
}

/// Run [`check_extraction`] on every file in `dir`.
///
/// Files that are not valid UTF-8 are checked with lossy decoding. A missing
/// directory is treated as empty. Returns the number of files checked.
///
/// # Panics
///
/// Panics if the directory cannot be read or an invariant does not hold.
pub fn run_regression_inputs(dir: impl AsRef<Path>) -> usize {
    let dir = dir.as_ref();
    if !dir.exists() {
        return 0;
    }

    let mut paths: Vec<_> = fs::read_dir(dir)
        .expect("regression directory is readable")
        .map(|entry| entry.expect("regression entry is readable").path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    for path in &paths {
        let bytes = fs::read(path).expect("regression input is readable");
        check_extraction(&String::from_utf8_lossy(&bytes));
    }
    paths.len()
}
