//! Core library for pgreport.
//!
//! Provides the pieces the `pgreport` binary is assembled from: a validated
//! connection configuration, a single-session PostgreSQL connector, catalog
//! introspection over `information_schema`, and column-aligned text
//! rendering of the resulting snapshot.
//!
//! # Architecture
//! The run is strictly sequential: one connection, one table-listing query,
//! one column query per table, one rendering pass. There is no pooling, no
//! caching, and no retry logic. Rendering is a pure function over the
//! snapshot so it can be tested without a database.

mod collect;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
mod row;
pub mod session;

// Re-export commonly used types
pub use config::ConnectConfig;
pub use error::{PgReportError, Result};
pub use logging::init_logging;
pub use models::{Column, SchemaSnapshot, Table, TableRef};
pub use render::render;
pub use session::Session;
