//! Schema representation types.
//!
//! These types describe the tables a DDL front end hands over for code
//! generation. Column types are already resolved to C# type tokens.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Schema definition for a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name as written in the DDL (snake or kebab case).
    pub name: String,
    /// Resolved C# type (e.g. `Guid`, `int`, `string`).
    pub type_name: String,
    /// Whether the column allows NULL values.
    #[serde(default)]
    pub nullable: bool,
    /// Whether this column was declared as a primary key candidate.
    #[serde(default)]
    pub primary_key: bool,
    /// Whether this column auto-increments.
    #[serde(default)]
    pub auto_increment: bool,
}

impl Column {
    /// Creates a new non-nullable column.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            nullable: false,
            primary_key: false,
            auto_increment: false,
        }
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the column as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Marks the column as a primary key candidate.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Sets the column to auto-increment.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// The type as it appears in generated code (`int?` for a nullable `int`).
    #[must_use]
    pub fn type_as_string(&self) -> String {
        if self.nullable {
            format!("{}?", self.type_name)
        } else {
            self.type_name.clone()
        }
    }
}

/// Complete schema definition for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Column definitions, in declaration order.
    pub columns: Vec<Column>,
    /// Primary key column(s).
    pub primary_key: BTreeSet<String>,
}

impl Table {
    /// Creates a new table without columns.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: BTreeSet::new(),
        }
    }

    /// Adds a column to the table.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        if column.primary_key {
            self.primary_key.insert(column.name.clone());
        }
        self.columns.push(column);
        self
    }

    /// Replaces the primary key columns (a table-level constraint).
    #[must_use]
    pub fn primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the named column belongs to the primary key.
    #[must_use]
    pub fn is_primary_key(&self, column: &str) -> bool {
        self.primary_key.contains(column)
    }

    /// Returns true if at least one column belongs to the primary key.
    #[must_use]
    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(|c| self.is_primary_key(&c.name))
    }

    /// Returns true if at least one column auto-increments.
    #[must_use]
    pub fn has_auto_increment(&self) -> bool {
        self.columns.iter().any(|c| c.auto_increment)
    }

    /// Gets a column by its exact name.
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Gets the first column whose name matches ignoring case.
    #[must_use]
    pub fn find_column_ignore_case(&self, name: &str) -> Option<&Column> {
        let name = name.to_lowercase();
        self.columns.iter().find(|c| c.name.to_lowercase() == name)
    }

    /// Checks that column names are unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(Error::DuplicateColumn {
                    table: self.name.clone(),
                    column: column.name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Wire form of a table. The primary key defaults to the candidate columns.
#[derive(Deserialize)]
struct RawTable {
    name: String,
    #[serde(default)]
    columns: Vec<Column>,
    #[serde(default)]
    primary_key: Option<BTreeSet<String>>,
}

impl TryFrom<RawTable> for Table {
    type Error = Error;

    fn try_from(raw: RawTable) -> Result<Self> {
        let mut table = raw
            .columns
            .into_iter()
            .fold(Self::new(raw.name), Self::column);
        if let Some(primary_key) = raw.primary_key {
            table = table.primary_key(primary_key);
        }
        table.validate()?;
        Ok(table)
    }
}

/// A set of tables parsed from one directory of DDL scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Directory the scripts were read from; its name becomes a namespace segment.
    pub script_directory: PathBuf,
    /// All tables, in script order.
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Schema {
    /// Creates an empty schema for a script directory.
    #[must_use]
    pub fn new(script_directory: impl Into<PathBuf>) -> Self {
        Self {
            script_directory: script_directory.into(),
            tables: Vec::new(),
        }
    }

    /// Adds a table to the schema.
    #[must_use]
    pub fn table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Gets a table by name.
    #[must_use]
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_builder() {
        let col = Column::new("id", "int").nullable().primary_key().auto_increment();

        assert_eq!(col.name, "id");
        assert!(col.primary_key);
        assert!(col.auto_increment);
        assert!(!col.nullable); // Primary keys are NOT NULL
    }

    #[test]
    fn test_type_as_string() {
        assert_eq!(Column::new("age", "int").type_as_string(), "int");
        assert_eq!(Column::new("age", "int").nullable().type_as_string(), "int?");
    }

    #[test]
    fn test_table_builder_collects_primary_key() {
        let table = Table::new("user_role")
            .column(Column::new("user_id", "Guid").primary_key())
            .column(Column::new("role_id", "Guid").primary_key())
            .column(Column::new("granted_by", "string").nullable());

        assert_eq!(table.columns.len(), 3);
        assert!(table.is_primary_key("user_id"));
        assert!(table.is_primary_key("role_id"));
        assert!(!table.is_primary_key("granted_by"));
        assert!(!table.is_primary_key("USER_ID"));
        assert!(table.has_primary_key());
        assert!(!table.has_auto_increment());
    }

    #[test]
    fn test_explicit_primary_key_replaces_candidates() {
        let table = Table::new("tag")
            .column(Column::new("id", "int").primary_key())
            .column(Column::new("code", "string"))
            .primary_key(["code"]);

        assert!(!table.is_primary_key("id"));
        assert!(table.is_primary_key("code"));
    }

    #[test]
    fn test_primary_key_ignores_unknown_columns() {
        let table = Table::new("tag")
            .column(Column::new("code", "string"))
            .primary_key(["missing"]);

        assert!(!table.has_primary_key());
    }

    #[test]
    fn test_find_column_ignore_case() {
        let table = Table::new("t").column(Column::new("RoleId", "Guid"));

        assert!(table.get_column("roleid").is_none());
        assert_eq!(
            table.find_column_ignore_case("roleid").map(|c| c.name.as_str()),
            Some("RoleId")
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_columns() {
        let table = Table::new("t")
            .column(Column::new("id", "int"))
            .column(Column::new("id", "string"));

        assert_eq!(
            table.validate(),
            Err(Error::DuplicateColumn {
                table: "t".into(),
                column: "id".into()
            })
        );
    }

    #[test]
    fn test_deserialize_table_derives_primary_key() {
        let json = r#"{
            "name": "user_profile",
            "columns": [
                {"name": "id", "type_name": "Guid", "primary_key": true},
                {"name": "nick", "type_name": "string", "nullable": true}
            ]
        }"#;
        let table: Table = serde_json::from_str(json).unwrap();

        assert!(table.is_primary_key("id"));
        assert!(table.columns[1].nullable);
        assert!(!table.columns[0].auto_increment);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_columns() {
        let json = r#"{
            "name": "t",
            "columns": [
                {"name": "id", "type_name": "int"},
                {"name": "id", "type_name": "int"}
            ]
        }"#;
        let err = serde_json::from_str::<Table>(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate column 'id'"));
    }

    #[test]
    fn test_schema_round_trips_through_json() {
        let schema = Schema::new("Scripts/Global").table(
            Table::new("tag")
                .column(Column::new("id", "int").primary_key().auto_increment()),
        );
        let json = serde_json::to_string(&schema).unwrap();
        let back: Schema = serde_json::from_str(&json).unwrap();

        assert_eq!(back, schema);
        assert!(back.get_table("tag").is_some());
    }
}
