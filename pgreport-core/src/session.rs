//! Single-session PostgreSQL connector.
//!
//! One connection, owned exclusively for the whole run. Statements execute
//! in autocommit mode: the session never opens an explicit transaction, so
//! every statement commits immediately.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};
use sqlx::{ConnectOptions, Connection};

use crate::config::ConnectConfig;
use crate::error::PgReportError;
use crate::Result;

/// An open PostgreSQL session.
#[derive(Debug)]
pub struct Session {
    pub(crate) conn: PgConnection,
}

impl Session {
    /// Establishes a single synchronous session from explicit credentials.
    ///
    /// The TLS mode is passed through only when the config carries one;
    /// when unset the parameter is omitted and the driver default applies.
    ///
    /// # Errors
    /// Returns `PgReportError::Configuration` for unusable config values
    /// and `PgReportError::Connection` when the driver fails to connect or
    /// authenticate. Connection failures are fatal — there is no retry.
    pub async fn connect(config: &ConnectConfig) -> Result<Self> {
        config.validate()?;

        let mut options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .application_name(concat!("pgreport-", env!("CARGO_PKG_VERSION")));

        if let Some(mode) = &config.ssl_mode {
            let mode = PgSslMode::from_str(mode).map_err(|e| {
                PgReportError::configuration(format!("Invalid sslmode '{}': {}", mode, e))
            })?;
            options = options.ssl_mode(mode);
        }

        let conn = options
            .connect()
            .await
            .map_err(|e| PgReportError::connection_failed(config.to_string(), e))?;

        tracing::info!("Connected to {}", config);
        Ok(Self { conn })
    }

    /// Gracefully terminates the session.
    ///
    /// Dropping the session at process exit is equivalent; calling this
    /// lets the server see a clean disconnect.
    pub async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .map_err(|e| PgReportError::connection_failed("Failed to close session", e))
    }
}
