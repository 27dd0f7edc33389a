//! Row decoding helpers shared by the collection queries.

use crate::{Result, error::PgReportError};
use sqlx::{Row, postgres::PgRow};

/// Extension trait for extracting typed values from database rows with
/// consistent error context.
pub(crate) trait RowExt {
    /// Extracts a typed field from the row.
    ///
    /// # Arguments
    /// * `field_name` - Name of the column to extract
    /// * `table_context` - Optional table name for error messages
    fn get_field<'r, T>(&'r self, field_name: &str, table_context: Option<&str>) -> Result<T>
    where
        T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>;
}

impl RowExt for PgRow {
    fn get_field<'r, T>(&'r self, field_name: &str, table_context: Option<&str>) -> Result<T>
    where
        T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
    {
        self.try_get(field_name)
            .map_err(|e| PgReportError::parse_field(field_name, table_context, e))
    }
}
