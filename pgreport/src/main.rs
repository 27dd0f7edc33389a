//! PostgreSQL schema report tool.
//!
//! Connects to a database, introspects base tables and their columns from
//! `information_schema`, and prints a per-table column-aligned report on
//! stdout. Connection and query failures are fatal: the process exits
//! non-zero without emitting a partial report.

use clap::Parser;
use pgreport_core::{ConnectConfig, Result, Session, init_logging, render};
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "pgreport")]
#[command(about = "PostgreSQL schema report tool")]
#[command(version)]
#[command(long_about = "
Connects to a PostgreSQL database and prints every base table (excluding
pg_catalog and information_schema) with its columns: name, data type,
nullability, and maximum character length, aligned per table.

EXAMPLES:
  pgreport mydb reader secret localhost
  pgreport mydb reader secret db.internal 6432 require
  pgreport --tables-only mydb reader secret localhost
")]
struct Cli {
    /// Database name
    database: String,

    /// Role to authenticate as
    user: String,

    /// Password for the role
    password: String,

    /// Server host name or address
    host: String,

    /// Server port
    #[arg(default_value_t = pgreport_core::config::DEFAULT_PORT)]
    port: u16,

    /// TLS mode passed through to the driver (disable, allow, prefer,
    /// require, verify-ca, verify-full); omitted entirely when unset
    sslmode: Option<String>,

    /// Surplus positional arguments, accepted and ignored
    #[arg(hide = true)]
    rest: Vec<String>,

    /// List qualified table names only, without column detail
    #[arg(long)]
    tables_only: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn connect_config(&self) -> ConnectConfig {
        let mut config = ConnectConfig::new(&self.database, &self.user, &self.password, &self.host)
            .with_port(self.port);
        if let Some(mode) = &self.sslmode {
            config = config.with_ssl_mode(mode);
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("pgreport: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Prints the error and its driver-level causes on stderr.
fn report_error(error: &pgreport_core::PgReportError) {
    eprintln!("pgreport: {error}");
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = cli.connect_config();

    let mut session = Session::connect(&config).await?;
    println!("Connected to database!");

    if cli.tables_only {
        let tables = session.list_tables().await?;
        info!("Found {} tables", tables.len());
        for table in &tables {
            println!("{table}");
        }
    } else {
        let snapshot = session.read_schema().await?;
        info!("Found {} tables", snapshot.tables.len());
        print!("{}", render(&snapshot));
    }

    session.close().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_argument_mapping() {
        let cli = Cli::try_parse_from([
            "pgreport", "mydb", "reader", "secret", "db.internal", "6432", "require",
        ])
        .unwrap();

        let config = cli.connect_config();
        assert_eq!(config.database, "mydb");
        assert_eq!(config.user, "reader");
        assert_eq!(config.password, "secret");
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6432);
        assert_eq!(config.ssl_mode.as_deref(), Some("require"));
    }

    #[test]
    fn test_trailing_defaults() {
        let cli =
            Cli::try_parse_from(["pgreport", "mydb", "reader", "secret", "localhost"]).unwrap();

        let config = cli.connect_config();
        assert_eq!(config.port, 5432);
        assert_eq!(config.ssl_mode, None);
        assert!(!cli.tables_only);
    }

    #[test]
    fn test_surplus_arguments_are_ignored() {
        let cli = Cli::try_parse_from([
            "pgreport", "mydb", "reader", "secret", "localhost", "5432", "prefer", "extra",
            "ignored",
        ])
        .unwrap();

        assert_eq!(cli.rest, vec!["extra", "ignored"]);
        assert_eq!(cli.connect_config().ssl_mode.as_deref(), Some("prefer"));
    }

    #[test]
    fn test_missing_required_arguments_error() {
        assert!(Cli::try_parse_from(["pgreport", "mydb", "reader"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "pgreport",
            "--tables-only",
            "-vv",
            "mydb",
            "reader",
            "secret",
            "localhost",
        ])
        .unwrap();

        assert!(cli.tables_only);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
