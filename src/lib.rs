#![doc = include_str!("../README.md")]
#![deny(clippy::mod_module_files)]

pub mod errors;
pub mod extractor;
pub mod lexer;
pub mod normalize;
pub mod parser;
pub mod pattern;
pub mod schema;
pub mod split;
#[cfg(feature = "testing")]
pub mod testing;
pub mod token;

// Re-export main types
pub use errors::Error;
pub use extractor::{Diagnostic, Extraction, Location, TableExtractor, extract_tables};
pub use lexer::{LexerError, Tokens};
pub use schema::{Column, Table};
