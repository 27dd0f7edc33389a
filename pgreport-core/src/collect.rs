//! Catalog introspection: the table listing and per-table column queries.
//!
//! Query text is literal `information_schema` SQL. The filter predicates
//! (exclude `pg_catalog` and `information_schema`, base tables only) define
//! the report's scope, and the ORDER BY clauses define the only valid
//! output order — both must be preserved exactly.

use crate::models::{Column, SchemaSnapshot, Table, TableRef};
use crate::row::RowExt;
use crate::session::Session;
use crate::{Result, error::PgReportError};

const TABLES_QUERY: &str = r#"
    SELECT table_schema, table_name, table_type
    FROM information_schema.tables
    WHERE table_schema != 'pg_catalog'
    AND table_schema != 'information_schema'
    AND table_type = 'BASE TABLE'
    ORDER BY table_schema, table_name
"#;

const COLUMNS_QUERY: &str = r#"
    SELECT column_name, ordinal_position, is_nullable, data_type, character_maximum_length
    FROM information_schema.columns
    WHERE table_schema = $1
    AND table_name = $2
    ORDER BY ordinal_position
"#;

impl Session {
    /// Reads a full schema snapshot: every base table in `(schema, name)`
    /// order, each with its columns in ordinal order.
    ///
    /// Issues one listing query plus one column query per table. A fresh
    /// call re-fetches everything; the read is idempotent against an
    /// unchanged catalog.
    ///
    /// # Errors
    /// Any query failure propagates as `PgReportError::Query`. No partial
    /// snapshot is ever returned.
    pub async fn read_schema(&mut self) -> Result<SchemaSnapshot> {
        let started = std::time::Instant::now();
        tracing::debug!("Enumerating base tables");

        let refs = self.fetch_table_refs().await?;
        let mut tables = Vec::with_capacity(refs.len());

        for (table_ref, table_type) in refs {
            let columns = self
                .fetch_columns(&table_ref.schema, &table_ref.name)
                .await?;
            tracing::debug!(
                "Collected table '{}' with {} columns",
                table_ref,
                columns.len()
            );
            tables.push(Table {
                schema: table_ref.schema,
                name: table_ref.name,
                table_type,
                columns,
            });
        }

        tracing::info!(
            "Collected {} tables in {:.2}s",
            tables.len(),
            started.elapsed().as_secs_f64()
        );
        Ok(SchemaSnapshot { tables })
    }

    /// Shallow listing path: qualified table names only, no column detail.
    ///
    /// Same query and ordering as `read_schema`, without the per-table
    /// column round-trips.
    pub async fn list_tables(&mut self) -> Result<Vec<TableRef>> {
        let refs = self.fetch_table_refs().await?;
        Ok(refs.into_iter().map(|(table_ref, _)| table_ref).collect())
    }

    async fn fetch_table_refs(&mut self) -> Result<Vec<(TableRef, String)>> {
        let rows = sqlx::query(TABLES_QUERY)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|e| PgReportError::query_failed("Failed to enumerate base tables", e))?;

        let mut refs = Vec::with_capacity(rows.len());
        for row in &rows {
            let schema: String = row.get_field("table_schema", None)?;
            let name: String = row.get_field("table_name", None)?;
            let table_type: String = row.get_field("table_type", None)?;
            refs.push((TableRef { schema, name }, table_type));
        }
        Ok(refs)
    }

    async fn fetch_columns(&mut self, schema: &str, table: &str) -> Result<Vec<Column>> {
        let rows = sqlx::query(COLUMNS_QUERY)
            .bind(schema)
            .bind(table)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|e| {
                PgReportError::query_failed(
                    format!("Failed to collect columns for table '{}.{}'", schema, table),
                    e,
                )
            })?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in &rows {
            let name: String = row.get_field("column_name", Some(table))?;
            let ordinal_position: i32 = row.get_field("ordinal_position", Some(table))?;
            let is_nullable: String = row.get_field("is_nullable", Some(table))?;
            let data_type: String = row.get_field("data_type", Some(table))?;
            let character_maximum_length: Option<i32> =
                row.get_field("character_maximum_length", Some(table))?;

            columns.push(Column {
                name,
                ordinal_position: ordinal_position as u32,
                is_nullable: is_nullable == "YES",
                data_type,
                character_maximum_length,
            });
        }
        Ok(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The query text is part of the tool's contract: the filters define
    // which tables appear and the ORDER BY clauses define output order.

    #[test]
    fn test_table_query_scope_and_order() {
        assert!(TABLES_QUERY.contains("table_schema != 'pg_catalog'"));
        assert!(TABLES_QUERY.contains("table_schema != 'information_schema'"));
        assert!(TABLES_QUERY.contains("table_type = 'BASE TABLE'"));
        assert!(TABLES_QUERY.contains("ORDER BY table_schema, table_name"));
    }

    #[test]
    fn test_column_query_binds_and_order() {
        assert!(COLUMNS_QUERY.contains("table_schema = $1"));
        assert!(COLUMNS_QUERY.contains("table_name = $2"));
        assert!(COLUMNS_QUERY.contains("ORDER BY ordinal_position"));
        assert!(COLUMNS_QUERY.contains("character_maximum_length"));
    }
}
