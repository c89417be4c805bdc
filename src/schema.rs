//! Table and column metadata extracted from `CREATE TABLE` statements.
mod column;
mod table;

pub use column::Column;
pub use table::Table;
