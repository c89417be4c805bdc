//! Column descriptor.

/// Metadata of one column definition.
///
/// String fields are empty when the corresponding clause is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Column {
    /// Column name, unquoted. Never empty.
    pub name: String,
    /// Declared type as written, e.g. `VARCHAR(255)` or `INT UNSIGNED`.
    pub data_type: String,
    /// Default value: a literal's value, the text inside `DEFAULT (...)`,
    /// `CURRENT_TIMESTAMP` or `NULL`.
    pub default_value: String,
    /// Column comment.
    pub comment: String,
    /// Whether the column is declared `NOT NULL`.
    pub not_null: bool,
    /// Whether the column is declared `AUTO_INCREMENT`.
    pub auto_increment: bool,
    /// Character set name.
    pub character: String,
    /// Collation name.
    pub collate: String,
}

impl Column {
    /// Create a column with the given name and no other attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether the column has a `DEFAULT` value.
    #[must_use]
    pub fn has_default(&self) -> bool {
        !self.default_value.is_empty()
    }

    /// Whether the column accepts `NULL`.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        !self.not_null
    }
}
