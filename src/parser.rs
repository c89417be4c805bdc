//! Clause parsers working on normalized token slices.
//!
//! Nothing here builds a syntax tree. A statement is recognized by a fixed
//! prefix, cut at its outermost parentheses, and every clause of interest is
//! pulled out by an independent pattern search. Clauses that no extractor
//! looks for are ignored, so their order and presence never matter.

mod column;
mod table;

pub use column::parse_column;
pub use table::{TableClauses, is_create_table, parse_table};
