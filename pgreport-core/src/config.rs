//! Connection configuration with named, validated fields.
//!
//! Replaces ad-hoc positional parameter handling with an explicit struct:
//! every field is named, defaults are documented, and `validate` rejects
//! unusable values before a connection is ever attempted.

use crate::Result;
use crate::error::PgReportError;

/// Default PostgreSQL server port, used when the caller leaves it unset.
pub const DEFAULT_PORT: u16 = 5432;

/// TLS modes the `sslmode` parameter accepts.
const SSL_MODES: [&str; 6] = [
    "disable",
    "allow",
    "prefer",
    "require",
    "verify-ca",
    "verify-full",
];

/// Credentials and endpoint for a single database session.
///
/// `Display` never includes the password, so the config is safe to log and
/// to embed in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectConfig {
    /// Database name
    pub database: String,
    /// Role to authenticate as
    pub user: String,
    /// Password for the role
    pub password: String,
    /// Server host name or address
    pub host: String,
    /// Server port (defaults to 5432)
    pub port: u16,
    /// TLS mode passed through verbatim when present. When `None` the
    /// parameter is omitted entirely, which is distinct from an explicit
    /// `"disable"` — the driver default applies.
    pub ssl_mode: Option<String>,
}

impl ConnectConfig {
    /// Creates a configuration with the default port and no TLS mode.
    pub fn new(
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            user: user.into(),
            password: password.into(),
            host: host.into(),
            port: DEFAULT_PORT,
            ssl_mode: None,
        }
    }

    /// Sets the server port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets an explicit TLS mode.
    #[must_use]
    pub fn with_ssl_mode(mut self, ssl_mode: impl Into<String>) -> Self {
        self.ssl_mode = Some(ssl_mode.into());
        self
    }

    /// Validates configuration values.
    ///
    /// # Errors
    /// Returns `PgReportError::Configuration` if any field is unusable.
    pub fn validate(&self) -> Result<()> {
        if self.database.is_empty() {
            return Err(PgReportError::configuration("database cannot be empty"));
        }

        if self.user.is_empty() {
            return Err(PgReportError::configuration("user cannot be empty"));
        }

        if self.host.is_empty() {
            return Err(PgReportError::configuration("host cannot be empty"));
        }

        if self.port == 0 {
            return Err(PgReportError::configuration(
                "port must be greater than 0",
            ));
        }

        if let Some(mode) = &self.ssl_mode {
            if !SSL_MODES.contains(&mode.as_str()) {
                return Err(PgReportError::configuration(format!(
                    "unknown sslmode '{}' (expected one of: {})",
                    mode,
                    SSL_MODES.join(", ")
                )));
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for ConnectConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
        // Intentionally omits the password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConnectConfig {
        ConnectConfig::new("inventory", "reader", "s3cret", "db.internal")
    }

    #[test]
    fn test_defaults() {
        let config = config();
        assert_eq!(config.port, 5432);
        assert_eq!(config.ssl_mode, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = config().with_port(6432).with_ssl_mode("require");
        assert_eq!(config.port, 6432);
        assert_eq!(config.ssl_mode.as_deref(), Some("require"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let mut bad = config();
        bad.database = String::new();
        assert!(bad.validate().is_err());

        let mut bad = config();
        bad.user = String::new();
        assert!(bad.validate().is_err());

        let mut bad = config();
        bad.host = String::new();
        assert!(bad.validate().is_err());

        let bad = config().with_port(0);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_ssl_modes() {
        for mode in ["disable", "allow", "prefer", "require", "verify-ca", "verify-full"] {
            assert!(config().with_ssl_mode(mode).validate().is_ok(), "{mode}");
        }

        let err = config().with_ssl_mode("enabled").validate().unwrap_err();
        assert!(err.to_string().contains("unknown sslmode 'enabled'"));
    }

    #[test]
    fn test_display_omits_password() {
        let rendered = config().with_port(5433).to_string();
        assert_eq!(rendered, "reader@db.internal:5433/inventory");
        assert!(!rendered.contains("s3cret"));
    }
}
