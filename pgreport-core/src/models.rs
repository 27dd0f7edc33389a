//! Data model for one point-in-time view of a database schema.
//!
//! A `SchemaSnapshot` owns its `Table`s, and each `Table` exclusively owns
//! its `Column`s. Ordering is fixed at collection time: tables by
//! `(schema, name)`, columns by ordinal position. Nothing here is updated
//! incrementally — a fresh read rebuilds the whole snapshot.

use serde::{Deserialize, Serialize};

/// A single column of a base table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// 1-based position within the table; unique per table and the only
    /// valid display order
    pub ordinal_position: u32,
    /// Whether the column accepts NULL (derived from the catalog's YES/NO)
    pub is_nullable: bool,
    /// Data type as reported by the catalog, e.g. `character varying`
    pub data_type: String,
    /// Maximum character length; absent for non-character types
    pub character_maximum_length: Option<i32>,
}

/// A base table identified by `(schema, name)`, with its columns in
/// ordinal order. Immutable once populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Schema the table lives in
    pub schema: String,
    /// Table name
    pub name: String,
    /// Catalog table type; always `BASE TABLE` given the listing filter
    pub table_type: String,
    /// Columns ordered by ordinal position
    pub columns: Vec<Column>,
}

impl Table {
    /// Returns the schema-qualified name, e.g. `public.users`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

/// Qualified table name returned by the shallow listing path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    /// Schema the table lives in
    pub schema: String,
    /// Table name
    pub name: String,
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

/// The full ordered sequence of tables for one connection at one point in
/// time.
///
/// Derives `Eq` so that two reads against an unchanged database can be
/// compared directly: identical catalogs produce identical snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Tables ordered by `(schema, name)` ascending
    pub tables: Vec<Table>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        let table = Table {
            schema: "public".to_string(),
            name: "users".to_string(),
            table_type: "BASE TABLE".to_string(),
            columns: Vec::new(),
        };
        assert_eq!(table.qualified_name(), "public.users");
    }

    #[test]
    fn test_table_ref_display() {
        let table_ref = TableRef {
            schema: "audit".to_string(),
            name: "events".to_string(),
        };
        assert_eq!(table_ref.to_string(), "audit.events");
    }

    #[test]
    fn test_snapshot_equality_is_structural() {
        let column = Column {
            name: "id".to_string(),
            ordinal_position: 1,
            is_nullable: false,
            data_type: "integer".to_string(),
            character_maximum_length: None,
        };
        let table = Table {
            schema: "public".to_string(),
            name: "users".to_string(),
            table_type: "BASE TABLE".to_string(),
            columns: vec![column],
        };

        let first = SchemaSnapshot {
            tables: vec![table.clone()],
        };
        let second = SchemaSnapshot {
            tables: vec![table],
        };
        assert_eq!(first, second);

        let empty = SchemaSnapshot::default();
        assert_ne!(first, empty);
    }
}
