//! Error types for pgreport operations.
//!
//! Two operative kinds exist: connection establishment and catalog query
//! failures. Both are fatal — the tool never retries and never emits a
//! partial report. Error text never includes the password.

use thiserror::Error;

/// Main error type for pgreport operations.
#[derive(Debug, Error)]
pub enum PgReportError {
    /// Failed to establish or authenticate a database session
    #[error("Database connection failed: {context}")]
    Connection {
        /// Human-readable description of what was being connected to
        context: String,
        /// Underlying driver error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failure during table or column introspection
    #[error("Schema query failed: {context}")]
    Query {
        /// Human-readable description of the failing query
        context: String,
        /// Underlying driver error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration
        message: String,
    },
}

/// Convenience type alias for Results with `PgReportError`
pub type Result<T> = std::result::Result<T, PgReportError>;

impl PgReportError {
    /// Creates a connection error with context
    pub fn connection_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates a query error with context
    pub fn query_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Query {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates a parsing error for database column extraction
    ///
    /// # Arguments
    /// * `field_name` - Name of the field being parsed
    /// * `table_context` - Optional table context for better error messages
    /// * `error` - The underlying decoding error
    pub fn parse_field<E>(field_name: &str, table_context: Option<&str>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let context = match table_context {
            Some(table) => format!(
                "Failed to parse field '{}' from result for table '{}'",
                field_name, table
            ),
            None => format!(
                "Failed to parse field '{}' from database result",
                field_name
            ),
        };
        Self::Query {
            context,
            source: Box::new(error),
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
