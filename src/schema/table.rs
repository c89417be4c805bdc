//! Table descriptor.

use super::Column;

/// Metadata of one `CREATE TABLE` statement.
///
/// # Example
///
/// ```rust
/// use create_table_analyzer::extract_tables;
///
/// let tables = extract_tables(
///     "CREATE TABLE `shop`.`orders` (`id` INT NOT NULL, `total` DECIMAL(10,2)) ENGINE=InnoDB;",
/// );
/// let orders = &tables[0];
/// assert_eq!(orders.name, "shop.orders");
/// assert_eq!(orders.qualifier(), Some("shop"));
/// assert_eq!(orders.unqualified_name(), "orders");
/// assert_eq!(orders.column_names(), vec!["id", "total"]);
/// assert_eq!(orders.column("total").unwrap().data_type, "DECIMAL(10,2)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Table {
    /// Table name, unquoted; `schema.table` when qualified. Never empty.
    pub name: String,
    /// Table comment.
    pub comment: String,
    /// Storage engine from the `ENGINE` table option.
    pub engine: String,
    /// Default character set from the `[DEFAULT] CHARSET` table option.
    pub character: String,
    /// Default collation from the `COLLATE` table option.
    pub collate: String,
    /// Column definitions in declaration order.
    pub columns: Vec<Column>,
}

impl Table {
    /// Create an empty table with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get the column with the given name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Get the column names.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// The schema part of a qualified name.
    #[must_use]
    pub fn qualifier(&self) -> Option<&str> {
        self.name.split_once('.').map(|(schema, _)| schema)
    }

    /// The name without its schema qualifier.
    #[must_use]
    pub fn unqualified_name(&self) -> &str {
        self.name
            .split_once('.')
            .map_or(self.name.as_str(), |(_, table)| table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        let mut table = Table::new("users");
        table.columns.push(Column::new("id"));
        table.columns.push(Column::new("email"));

        assert_eq!(table.column_names(), vec!["id", "email"]);
        assert!(table.column("email").is_some());
        assert!(table.column("missing").is_none());
        assert_eq!(table.qualifier(), None);
        assert_eq!(table.unqualified_name(), "users");
    }

    #[test]
    fn test_column_flags() {
        let mut column = Column::new("created_at");
        assert!(column.is_nullable());
        assert!(!column.has_default());

        column.not_null = true;
        column.default_value = "CURRENT_TIMESTAMP".into();
        assert!(!column.is_nullable());
        assert!(column.has_default());
    }
}
